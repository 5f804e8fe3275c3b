//! # Game Module
//!
//! Simulation core: world state, spatial types and the controllers that
//! advance the island each frame or on discrete player commands.
//!
//! - Game state and seedable session context
//! - Villager wandering and player movement
//! - Interaction resolution and timed location transitions
//! - Pure procedural animation poses for the renderer

pub mod animation;
pub mod interaction;
pub mod location;
pub mod movement;
pub mod overlays;
pub mod session;
pub mod state;
pub mod transition;
pub mod villagers;

pub use animation::*;
pub use interaction::*;
pub use location::*;
pub use movement::*;
pub use overlays::*;
pub use session::*;
pub use state::*;
pub use transition::*;
pub use villagers::*;

use crate::config::GRID_SIZE;
use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate in grid space.
///
/// Positions are plain values: controllers compute a new position and
/// replace the old one.
///
/// # Examples
///
/// ```
/// use island_horizons::Position;
///
/// let a = Position::new(0.0, 0.0);
/// let b = Position::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Centre of the island.
    pub fn center() -> Self {
        Self::new(GRID_SIZE / 2.0, GRID_SIZE / 2.0)
    }

    /// Calculates the Euclidean distance to another position.
    pub fn distance(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns this position shifted by the given amounts.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both coordinates lie within `[0, GRID_SIZE]`.
    pub fn is_within_grid(self) -> bool {
        (0.0..=GRID_SIZE).contains(&self.x) && (0.0..=GRID_SIZE).contains(&self.y)
    }

    /// Clamps both coordinates into `[min, max]`.
    pub fn clamped(self, min: f32, max: f32) -> Self {
        Self::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }
}

/// Cardinal and diagonal movement directions.
///
/// Each component is one of -1, 0 or 1; the zero vector is not a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {
    pub const NORTH: Direction = Direction { dx: 0, dy: -1 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const EAST: Direction = Direction { dx: 1, dy: 0 };

    /// Builds a direction from a unit delta.
    ///
    /// Returns `None` for the zero vector or any component outside -1..=1.
    ///
    /// # Examples
    ///
    /// ```
    /// use island_horizons::Direction;
    ///
    /// assert_eq!(Direction::from_delta(0, -1), Some(Direction::NORTH));
    /// assert!(Direction::from_delta(0, 0).is_none());
    /// assert!(Direction::from_delta(2, 0).is_none());
    /// ```
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        let valid = |v: i32| (-1..=1).contains(&v);
        if !valid(dx) || !valid(dy) || (dx == 0 && dy == 0) {
            return None;
        }
        Some(Self {
            dx: dx as i8,
            dy: dy as i8,
        })
    }

    pub fn dx(self) -> f32 {
        self.dx as f32
    }

    pub fn dy(self) -> f32 {
        self.dy as f32
    }

    /// True when both axes are non-zero.
    pub fn is_diagonal(self) -> bool {
        self.dx != 0 && self.dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let a = Position::new(1.0, 1.0);
        let b = Position::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_grid_bounds() {
        assert!(Position::new(0.0, 0.0).is_within_grid());
        assert!(Position::new(GRID_SIZE, GRID_SIZE).is_within_grid());
        assert!(!Position::new(-0.1, 5.0).is_within_grid());
        assert!(!Position::new(5.0, GRID_SIZE + 0.1).is_within_grid());
    }

    #[test]
    fn test_direction_validation() {
        assert!(Direction::from_delta(1, 1).unwrap().is_diagonal());
        assert!(!Direction::EAST.is_diagonal());
        assert!(Direction::from_delta(0, 0).is_none());
        assert!(Direction::from_delta(-2, 1).is_none());
    }

    #[test]
    fn test_clamped() {
        let p = Position::new(-3.0, 40.0).clamped(2.0, 28.0);
        assert_eq!(p, Position::new(2.0, 28.0));
    }
}
