//! # Player Movement
//!
//! Turns a direction command into a bounded position change.
//!
//! Diagonal steps are not normalized by default, so a diagonal move covers
//! `step * √2` while an axis-aligned move covers `step`. This matches how the
//! island has always played; set `normalize_diagonal` in the settings to
//! give every direction the same reach.

use crate::game::{Direction, Position};

/// Movement tuning for the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRules {
    /// Grid units per command along each non-zero axis
    pub step: f32,
    /// Scale diagonal moves so they cover `step` in total
    pub normalize_diagonal: bool,
}

impl Default for StepRules {
    fn default() -> Self {
        Self {
            step: crate::config::PLAYER_STEP,
            normalize_diagonal: false,
        }
    }
}

/// Computes where one step in `direction` leads.
///
/// Returns `None` when the candidate leaves `[0, GRID_SIZE]` on either axis;
/// the caller keeps the player where they were.
///
/// # Examples
///
/// ```
/// use island_horizons::{resolve_step, Direction, Position, StepRules};
///
/// let rules = StepRules::default();
/// let next = resolve_step(Position::new(15.0, 15.0), Direction::EAST, &rules);
/// assert_eq!(next, Some(Position::new(15.7, 15.0)));
///
/// assert_eq!(resolve_step(Position::new(0.3, 4.0), Direction::WEST, &rules), None);
/// ```
pub fn resolve_step(from: Position, direction: Direction, rules: &StepRules) -> Option<Position> {
    let mut step = rules.step;
    if rules.normalize_diagonal && direction.is_diagonal() {
        step /= std::f32::consts::SQRT_2;
    }

    let candidate = from.offset(direction.dx() * step, direction.dy() * step);
    if candidate.is_within_grid() {
        Some(candidate)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GRID_SIZE;

    #[test]
    fn test_axis_step_length() {
        let rules = StepRules::default();
        let start = Position::new(10.0, 10.0);
        let next = resolve_step(start, Direction::SOUTH, &rules).unwrap();
        assert!((start.distance(next) - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_moves_faster_by_default() {
        let rules = StepRules::default();
        let start = Position::new(10.0, 10.0);
        let diag = Direction::from_delta(1, 1).unwrap();
        let next = resolve_step(start, diag, &rules).unwrap();
        assert!((start.distance(next) - 0.7 * std::f32::consts::SQRT_2).abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_normalized_when_enabled() {
        let rules = StepRules {
            normalize_diagonal: true,
            ..StepRules::default()
        };
        let start = Position::new(10.0, 10.0);
        let diag = Direction::from_delta(-1, 1).unwrap();
        let next = resolve_step(start, diag, &rules).unwrap();
        assert!((start.distance(next) - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_edges_reject_moves() {
        let rules = StepRules::default();
        let corner = Position::new(GRID_SIZE - 0.2, 0.5);
        assert_eq!(resolve_step(corner, Direction::EAST, &rules), None);
        assert_eq!(resolve_step(corner, Direction::NORTH, &rules), None);
        assert!(resolve_step(corner, Direction::SOUTH, &rules).is_some());
    }

    #[test]
    fn test_landing_exactly_on_edge_is_allowed() {
        let rules = StepRules {
            step: 1.0,
            normalize_diagonal: false,
        };
        let next = resolve_step(Position::new(1.0, 5.0), Direction::WEST, &rules);
        assert_eq!(next, Some(Position::new(0.0, 5.0)));
    }
}
