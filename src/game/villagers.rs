//! # Villager Wandering
//!
//! Per-frame update that walks villagers toward their wander target at a
//! constant speed, or occasionally hands an idle villager a new target
//! near where it stands.
//!
//! There is no collision avoidance: villagers may overlap each other and
//! buildings.

use crate::config::GRID_SIZE;
use crate::game::{Position, Villager};
use crate::settings::WanderSettings;
use rand::Rng;

/// Outcome of moving toward a target for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WalkStep {
    /// Within one step of the target; snapped onto it
    Arrived(Position),
    /// Still en route
    Advanced(Position),
}

/// Moves `from` toward `target` by at most `speed` grid units.
///
/// Arrival happens when the remaining distance is strictly below `speed`,
/// so the travel time grows with distance rather than being a fixed
/// fraction of the trip.
///
/// # Examples
///
/// ```
/// use island_horizons::{walk_toward, Position, WalkStep};
///
/// let step = walk_toward(Position::new(0.0, 0.0), Position::new(10.0, 0.0), 1.0);
/// assert_eq!(step, WalkStep::Advanced(Position::new(1.0, 0.0)));
///
/// let step = walk_toward(Position::new(9.5, 0.0), Position::new(10.0, 0.0), 1.0);
/// assert_eq!(step, WalkStep::Arrived(Position::new(10.0, 0.0)));
/// ```
pub fn walk_toward(from: Position, target: Position, speed: f32) -> WalkStep {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance < speed || distance == 0.0 {
        return WalkStep::Arrived(target);
    }

    WalkStep::Advanced(from.offset(dx / distance * speed, dy / distance * speed))
}

/// Picks a wander target within `radius` of `origin` on each axis, kept
/// `margin` units away from the island edge.
pub fn pick_wander_target<R: Rng + ?Sized>(
    origin: Position,
    tuning: &WanderSettings,
    rng: &mut R,
) -> Position {
    let span = tuning.radius * 2.0;
    let ox = (rng.gen::<f32>() - 0.5) * span;
    let oy = (rng.gen::<f32>() - 0.5) * span;
    origin
        .offset(ox, oy)
        .clamped(tuning.margin, GRID_SIZE - tuning.margin)
}

/// Advances one villager by one frame. Returns true if anything changed.
pub fn step_villager<R: Rng + ?Sized>(
    villager: &mut Villager,
    speed: f32,
    tuning: &WanderSettings,
    rng: &mut R,
) -> bool {
    match villager.target_position {
        Some(target) => {
            match walk_toward(villager.position, target, speed) {
                WalkStep::Arrived(pos) => {
                    villager.position = pos;
                    villager.target_position = None;
                }
                WalkStep::Advanced(pos) => villager.position = pos,
            }
            true
        }
        None => {
            if !rng.gen_bool(tuning.chance) {
                return false;
            }
            let target = pick_wander_target(villager.position, tuning, rng);
            log::trace!("{} wanders toward {:?}", villager.name, target);
            villager.target_position = Some(target);
            true
        }
    }
}

/// Advances every villager by `delta` seconds.
///
/// Returns true only if at least one villager moved or picked a target, so
/// callers can skip downstream work on quiet frames.
pub fn advance_villagers<R: Rng + ?Sized>(
    villagers: &mut [Villager],
    delta: f32,
    tuning: &WanderSettings,
    rng: &mut R,
) -> bool {
    let speed = delta * tuning.speed;
    let mut changed = false;
    for villager in villagers.iter_mut() {
        changed |= step_villager(villager, speed, tuning, rng);
    }
    changed
}
