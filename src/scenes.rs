//! # Scene Management System
//!
//! Owns the session, display, input handler and dialogue dispatcher, and
//! runs one frame at a time: input, simulation tick, event routing,
//! dialogue replies, then drawing.

use crate::dialogue::{DialogueDispatcher, DialogueLine, DialogueReply};
use crate::game::{GameEvent, Session};
use crate::input::{apply_input, InputHandler, PlayerInput};
use crate::rendering::MacroquadDisplay;
use crate::IslandResult;
use macroquad::prelude::*;
use std::time::Duration;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Title screen with the generated greeting
    Title,
    /// Walking around
    Playing,
}

/// The main scene manager that coordinates all game scenes
pub struct SceneManager {
    current_scene: SceneType,
    session: Session,
    display: MacroquadDisplay,
    input_handler: InputHandler,
    dialogue: Option<DialogueDispatcher>,
}

impl SceneManager {
    /// Creates a scene manager and asks for the title greeting.
    ///
    /// Without a dispatcher every conversation gets the fallback line.
    pub fn new(
        session: Session,
        input_handler: InputHandler,
        mut dialogue: Option<DialogueDispatcher>,
    ) -> Self {
        let mut display = MacroquadDisplay::new(&session.state);
        display.add_message("Welcome to Island Horizons!".to_string());
        display.add_message("WASD/arrows to walk, F to interact".to_string());

        if let Some(dispatcher) = dialogue.as_mut() {
            dispatcher.request_greeting(session.state.day_time);
        }

        Self {
            current_scene: SceneType::Title,
            session,
            display,
            input_handler,
            dialogue,
        }
    }

    pub fn current_scene(&self) -> SceneType {
        self.current_scene
    }

    /// Runs the frame loop until the player quits.
    pub async fn run(&mut self) -> IslandResult<()> {
        loop {
            let dt = get_frame_time();
            if self.update(dt) {
                break;
            }
            self.display.render_game(&self.session, dt);
            next_frame().await;
        }
        log::info!("Game loop ended");
        Ok(())
    }

    /// Advances one frame. Returns true if exit is requested.
    fn update(&mut self, dt: f32) -> bool {
        for input in self.input_handler.poll(dt) {
            if input == PlayerInput::Quit {
                log::info!("Player quit the game");
                return true;
            }
            if let Err(e) = apply_input(&mut self.session, input) {
                self.display.add_message(e.to_string());
            }
        }

        self.session.tick(Duration::try_from_secs_f32(dt).unwrap_or_default());
        self.route_events();
        self.collect_replies();

        let scene = if self.session.overlays.menu_open {
            SceneType::Title
        } else {
            SceneType::Playing
        };
        if scene != self.current_scene {
            log::debug!("Scene changed to {:?}", scene);
            self.current_scene = scene;
        }
        false
    }

    /// Sends dialogue requests off and turns events into HUD messages.
    fn route_events(&mut self) {
        for event in self.session.drain_events() {
            if let Some(message) = event.describe() {
                self.display.add_message(message);
            }
            if let GameEvent::DialogueRequested { ticket, request } = event {
                match self.dialogue.as_mut() {
                    Some(dispatcher) => dispatcher.dispatch(ticket, request),
                    None => {
                        self.session.accept_dialogue(ticket, DialogueLine::fallback());
                    }
                }
            }
        }
    }

    fn collect_replies(&mut self) {
        let Some(dispatcher) = self.dialogue.as_mut() else {
            return;
        };
        for reply in dispatcher.poll() {
            match reply {
                DialogueReply::Line { ticket, line } => {
                    self.session.accept_dialogue(ticket, line);
                }
                DialogueReply::Greeting(text) => self.session.greeting = Some(text),
            }
        }
    }
}
