//! # Dialogue Module
//!
//! Boundary to the text-generation service that voices villagers.
//!
//! The simulation treats generation as an opaque lookup keyed by villager
//! and message. Failures never reach the simulation: they are logged once
//! and replaced by a fixed fallback line.

pub mod dispatcher;
pub mod gemini;
pub mod offline;

pub use dispatcher::*;
pub use gemini::*;
pub use offline::*;

use crate::config::{
    DEFAULT_PLAYER_MESSAGE, FALLBACK_DIALOGUE_EMOTION, FALLBACK_DIALOGUE_TEXT, FALLBACK_GREETING,
};
use crate::game::{DayTime, Personality, Villager};
use crate::settings::DialogueSettings;
use crate::IslandResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// What the service needs to know to voice a villager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueRequest {
    pub villager_id: String,
    pub name: String,
    pub species: String,
    pub personality: Personality,
    /// What the player said
    pub message: String,
}

impl DialogueRequest {
    /// Builds a request for `villager`, defaulting the message to a greeting.
    pub fn for_villager(villager: &Villager, message: Option<String>) -> Self {
        Self {
            villager_id: villager.id.clone(),
            name: villager.name.clone(),
            species: villager.species.clone(),
            personality: villager.personality,
            message: message.unwrap_or_else(|| DEFAULT_PLAYER_MESSAGE.to_string()),
        }
    }

    /// Character prompt sent to the language model.
    pub fn prompt(&self) -> String {
        format!(
            "You are {name}, a {species} villager in a cozy island life game.\n\
             Your personality is {personality}.\n\
             \n\
             The player says: \"{message}\"\n\
             \n\
             Respond as this character. Keep it short (max 2 sentences), cute, and stay in character.\n\
             If personality is 'lazy', talk about snacks or naps.\n\
             If personality is 'cranky', be a bit grumpy but kind-hearted.\n\
             If personality is 'peppy', use lots of exclamation marks and talk about being a pop star.\n\
             \n\
             Provide your response as JSON.",
            name = self.name,
            species = self.species,
            personality = self.personality.as_str(),
            message = self.message,
        )
    }
}

/// One generated line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueLine {
    pub text: String,
    /// One word: happy, surprised, neutral, sleepy, grumpy
    pub emotion: String,
}

impl DialogueLine {
    pub fn new(text: impl Into<String>, emotion: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emotion: emotion.into(),
        }
    }

    /// The line shown when generation fails.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_DIALOGUE_TEXT, FALLBACK_DIALOGUE_EMOTION)
    }
}

/// A text-generation backend.
///
/// Calls are blocking; [`fetch_dialogue`] moves them off the caller's
/// thread.
pub trait DialogueService: Send + Sync {
    /// Voices the villager described by `request`.
    fn generate(&self, request: &DialogueRequest) -> IslandResult<DialogueLine>;

    /// A short welcome for the given time of day.
    fn greeting(&self, day_time: DayTime) -> IslandResult<String>;
}

/// Generates a line, substituting the fallback on any failure.
pub async fn fetch_dialogue(
    service: Arc<dyn DialogueService>,
    request: DialogueRequest,
) -> DialogueLine {
    let name = request.name.clone();
    match tokio::task::spawn_blocking(move || service.generate(&request)).await {
        Ok(Ok(line)) => line,
        Ok(Err(e)) => {
            log::warn!("Dialogue for {} failed: {}", name, e);
            DialogueLine::fallback()
        }
        Err(e) => {
            log::warn!("Dialogue task for {} did not finish: {}", name, e);
            DialogueLine::fallback()
        }
    }
}

/// Generates an island greeting, substituting the fallback on any failure.
pub async fn fetch_greeting(service: Arc<dyn DialogueService>, day_time: DayTime) -> String {
    match tokio::task::spawn_blocking(move || service.greeting(day_time)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            log::warn!("Greeting failed: {}", e);
            FALLBACK_GREETING.to_string()
        }
        Err(e) => {
            log::warn!("Greeting task did not finish: {}", e);
            FALLBACK_GREETING.to_string()
        }
    }
}

/// Picks the backend described by the settings.
///
/// Falls back to [`OfflineDialogue`] when offline mode is requested or no
/// API key is available.
pub fn service_from_settings(settings: &DialogueSettings) -> Arc<dyn DialogueService> {
    if settings.offline {
        log::info!("Dialogue running offline");
        return Arc::new(OfflineDialogue::new());
    }
    match GeminiDialogue::from_settings(settings) {
        Some(service) => Arc::new(service),
        None => {
            log::info!(
                "No API key in ${}; dialogue running offline",
                settings.api_key_env
            );
            Arc::new(OfflineDialogue::new())
        }
    }
}
