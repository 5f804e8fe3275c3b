//! # Procedural Animation
//!
//! Character poses as a pure function of elapsed time and what the
//! character is doing, so animation runs at the render rate independently
//! of the simulation tick.

use crate::game::Position;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Displacements smaller than this on both axes do not turn the body.
const TURN_THRESHOLD: f32 = 0.01;
const TURN_EASE: f32 = 0.15;
const REST_EASE: f32 = 0.2;
const WALK_CADENCE: f32 = 10.0;
const HEAD_HEIGHT: f32 = 0.85;

/// What a character is doing this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activity {
    Idle,
    Walking,
    Fishing,
    Watering,
}

/// Limb and body offsets for one character, in radians / world units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Facing angle around the vertical axis
    pub heading: f32,
    pub left_leg: f32,
    pub right_leg: f32,
    pub left_arm: f32,
    pub right_arm: f32,
    pub body_lift: f32,
    pub body_roll: f32,
    pub head_lift: f32,
}

impl Pose {
    /// Standing pose facing "south".
    pub fn rest() -> Self {
        Self {
            right_arm: -0.3,
            head_lift: HEAD_HEIGHT,
            ..Self::default()
        }
    }
}

/// Inputs for [`pose`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseInput {
    pub activity: Activity,
    /// Where the character was when the previous pose was computed
    pub previous_position: Position,
    pub position: Position,
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Wraps an angle into `[-π, π]`.
fn wrap_angle(mut angle: f32) -> f32 {
    while angle < -PI {
        angle += TAU;
    }
    while angle > PI {
        angle -= TAU;
    }
    angle
}

/// Computes the next pose from the previous one.
///
/// Walking uses a sine-driven stride; any other activity eases limbs back
/// toward their resting targets (arms raised while fishing or watering).
pub fn pose(elapsed: f32, input: &PoseInput, previous: &Pose) -> Pose {
    let mut next = *previous;

    let dx = input.position.x - input.previous_position.x;
    let dy = input.position.y - input.previous_position.y;
    if dx.abs() > TURN_THRESHOLD || dy.abs() > TURN_THRESHOLD {
        let target = dx.atan2(dy);
        next.heading = previous.heading + wrap_angle(target - previous.heading) * TURN_EASE;
    }

    match input.activity {
        Activity::Walking => {
            let t = elapsed * WALK_CADENCE;
            let swing = t.sin() * 0.4;
            let lift = t.cos().abs() * 0.08;
            next.left_leg = swing;
            next.right_leg = -swing;
            next.left_arm = -swing * 0.8;
            next.right_arm = swing * 0.8;
            next.body_lift = lift;
            next.body_roll = (t * 0.5).sin() * 0.05;
            next.head_lift = HEAD_HEIGHT + lift * 0.5;
        }
        Activity::Idle | Activity::Fishing | Activity::Watering => {
            let busy = matches!(input.activity, Activity::Fishing | Activity::Watering);
            let (left_arm_rest, right_arm_rest) = if busy { (-0.8, 0.8) } else { (0.0, -0.3) };
            next.left_leg = lerp(previous.left_leg, 0.0, REST_EASE);
            next.right_leg = lerp(previous.right_leg, 0.0, REST_EASE);
            next.left_arm = lerp(previous.left_arm, left_arm_rest, REST_EASE);
            next.right_arm = lerp(previous.right_arm, right_arm_rest, REST_EASE);
            next.body_lift = lerp(previous.body_lift, 0.0, REST_EASE);
        }
    }

    next
}

/// Gentle vertical bob for standing residents.
pub fn idle_bob(elapsed: f32) -> f32 {
    (elapsed * 1.2).sin() * 0.03
}
