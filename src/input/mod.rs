//! # Input Module
//!
//! Keyboard and mouse handling. Raw macroquad key state is turned into
//! [`PlayerInput`] commands, which [`apply_input`] routes to the session.

use crate::game::{Direction, Panel, Session};
use crate::IslandResult;
use macroquad::prelude::*;

/// Seconds between repeated steps while a movement key is held.
pub const MOVE_REPEAT_SECS: f32 = 0.12;

/// Player commands understood by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Step in a direction
    Move(Direction),
    Interact,
    ToggleInventory,
    ToggleMap,
    ToggleWardrobe,
    /// Leave the current building
    Exit,
    /// Close the top-most panel
    Cancel,
    /// Start the game, buy, equip or dismiss, depending on what is open
    Confirm,
    Quit,
}

/// Combines held direction keys into one direction, if any.
///
/// Opposite keys cancel out.
pub fn held_direction(up: bool, down: bool, left: bool, right: bool) -> Option<Direction> {
    let dx = right as i32 - left as i32;
    let dy = down as i32 - up as i32;
    Direction::from_delta(dx, dy)
}

/// Emits a step immediately on press and then every `interval` while held.
#[derive(Debug, Clone)]
pub struct MoveRepeat {
    interval: f32,
    held: Option<Direction>,
    timer: f32,
}

impl MoveRepeat {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            held: None,
            timer: 0.0,
        }
    }

    /// Feeds the direction held this frame.
    pub fn update(&mut self, dt: f32, held: Option<Direction>) -> Option<Direction> {
        let Some(direction) = held else {
            self.held = None;
            return None;
        };
        if self.held != Some(direction) {
            self.held = Some(direction);
            self.timer = 0.0;
            return Some(direction);
        }
        self.timer += dt;
        if self.timer >= self.interval {
            self.timer -= self.interval;
            Some(direction)
        } else {
            None
        }
    }
}

/// Reads macroquad input each frame.
pub struct InputHandler {
    repeat: MoveRepeat,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            repeat: MoveRepeat::new(MOVE_REPEAT_SECS),
        }
    }

    /// Collects this frame's commands.
    pub fn poll(&mut self, dt: f32) -> Vec<PlayerInput> {
        let mut inputs = Vec::new();

        if is_key_pressed(KeyCode::Q) {
            inputs.push(PlayerInput::Quit);
        }
        if is_key_pressed(KeyCode::Escape) {
            inputs.push(PlayerInput::Cancel);
        }
        if is_key_pressed(KeyCode::Enter) || is_mouse_button_pressed(MouseButton::Left) {
            inputs.push(PlayerInput::Confirm);
        }
        if is_key_pressed(KeyCode::F) || is_key_pressed(KeyCode::Space) {
            inputs.push(PlayerInput::Interact);
        }
        if is_key_pressed(KeyCode::E) {
            inputs.push(PlayerInput::ToggleInventory);
        }
        if is_key_pressed(KeyCode::M) {
            inputs.push(PlayerInput::ToggleMap);
        }
        if is_key_pressed(KeyCode::C) {
            inputs.push(PlayerInput::ToggleWardrobe);
        }
        if is_key_pressed(KeyCode::X) {
            inputs.push(PlayerInput::Exit);
        }

        let held = held_direction(
            is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        );
        if let Some(direction) = self.repeat.update(dt, held) {
            inputs.push(PlayerInput::Move(direction));
        }

        inputs
    }
}

/// Routes one command to the session. Returns whether it had any effect.
///
/// While the shop or wardrobe list is open, vertical moves scroll the list
/// instead of walking.
pub fn apply_input(session: &mut Session, input: PlayerInput) -> IslandResult<bool> {
    let overlays = &session.overlays;
    let list_open = overlays.shop || overlays.wardrobe;

    Ok(match input {
        PlayerInput::Move(direction) if list_open => {
            if direction.dy() == 0.0 {
                return Ok(false);
            }
            session.move_cursor(direction.dy() as isize);
            true
        }
        PlayerInput::Move(direction) => session.move_player(direction),
        PlayerInput::Interact => session.interact(),
        PlayerInput::ToggleInventory => session.toggle(Panel::Inventory),
        PlayerInput::ToggleMap => session.toggle(Panel::Map),
        PlayerInput::ToggleWardrobe => session.toggle(Panel::Wardrobe),
        PlayerInput::Exit => session.leave_location(),
        PlayerInput::Cancel => session.close_top(),
        PlayerInput::Confirm => confirm(session)?,
        PlayerInput::Quit => false,
    })
}

fn confirm(session: &mut Session) -> IslandResult<bool> {
    let overlays = &session.overlays;
    if overlays.menu_open {
        return Ok(session.start_game());
    }
    if overlays.notice.is_some() {
        return Ok(session.close_top());
    }
    if overlays.shop {
        let cursor = overlays.cursor;
        session.buy_at(cursor)?;
        return Ok(true);
    }
    if overlays.wardrobe {
        let cursor = overlays.cursor;
        session.equip_at(cursor)?;
        return Ok(true);
    }
    if overlays.dialogue.as_ref().is_some_and(|p| !p.is_loading()) {
        return Ok(session.close_dialogue());
    }
    Ok(false)
}
