//! # Location Transitions
//!
//! Timed scene switches between the main island and the interiors.
//!
//! A transition is two-phase: starting it flips the controller into the
//! transitioning phase at once (input is locked from that moment), and after
//! the configured delay the arrival is handed back exactly once. A pending
//! transition cannot be cancelled, and a second request while one is
//! pending is ignored.

use crate::game::{Location, Position};
use std::time::Duration;

/// The two phases of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Stable,
    Transitioning,
}

/// Destination of a completed transition, applied to the state atomically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    pub location: Location,
    pub player_pos: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingTransition {
    arrival: Arrival,
    elapsed: Duration,
}

/// Drives the timed switch between locations.
#[derive(Debug, Clone)]
pub struct TransitionController {
    delay: Duration,
    pending: Option<PendingTransition>,
}

impl TransitionController {
    /// Creates a stable controller with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.pending.is_some() {
            TransitionPhase::Transitioning
        } else {
            TransitionPhase::Stable
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Where the pending transition leads, if any.
    pub fn destination(&self) -> Option<Location> {
        self.pending.map(|p| p.arrival.location)
    }

    /// Fraction of the delay already elapsed, `0.0` when stable.
    pub fn progress(&self) -> f32 {
        match self.pending {
            Some(p) if !self.delay.is_zero() => {
                (p.elapsed.as_secs_f32() / self.delay.as_secs_f32()).min(1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    /// Starts a transition toward `arrival`.
    ///
    /// Returns false, leaving the pending transition untouched, when one is
    /// already in flight.
    pub fn begin(&mut self, arrival: Arrival) -> bool {
        if self.pending.is_some() {
            log::debug!(
                "ignoring transition to {:?}: already heading to {:?}",
                arrival.location,
                self.destination()
            );
            return false;
        }
        self.pending = Some(PendingTransition {
            arrival,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Starts entering `location` at its entry point.
    pub fn enter(&mut self, location: Location) -> bool {
        self.begin(Arrival {
            location,
            player_pos: location.entry_point(),
        })
    }

    /// Starts returning to the main island from `from`.
    ///
    /// The return point is fixed now, keyed by the location being left.
    pub fn leave(&mut self, from: Location) -> bool {
        self.begin(Arrival {
            location: Location::Main,
            player_pos: from.return_point(),
        })
    }

    /// Advances the timer. Yields the arrival once the delay has elapsed.
    pub fn advance(&mut self, dt: Duration) -> Option<Arrival> {
        let pending = self.pending.as_mut()?;
        pending.elapsed += dt;
        if pending.elapsed < self.delay {
            return None;
        }
        let arrival = pending.arrival;
        self.pending = None;
        Some(arrival)
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::TRANSITION_DELAY_MS))
    }
}
