//! # Settings
//!
//! Runtime tuning loaded from an optional JSON file. Every field has a
//! default matching the [`crate::config`] constants, so a file only needs
//! the values it wants to change.

use crate::config;
use crate::game::StepRules;
use crate::{IslandError, IslandResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Villager wandering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderSettings {
    /// Walking speed in grid units per second
    pub speed: f32,
    /// Per-frame probability that an idle villager starts wandering
    pub chance: f64,
    /// Maximum offset of a new target on each axis
    pub radius: f32,
    /// Distance targets keep from the island edge
    pub margin: f32,
}

impl Default for WanderSettings {
    fn default() -> Self {
        Self {
            speed: config::VILLAGER_SPEED,
            chance: config::WANDER_CHANCE,
            radius: config::WANDER_RADIUS,
            margin: config::WANDER_MARGIN,
        }
    }
}

/// Dialogue generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueSettings {
    /// Base URL of the generation API
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Use canned lines instead of calling the API
    pub offline: bool,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key_env: "API_KEY".to_string(),
            offline: false,
        }
    }
}

/// Top-level runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for villager wandering; random when absent
    pub seed: Option<u64>,
    pub player_step: f32,
    /// Give diagonal moves the same reach as straight ones
    pub normalize_diagonal: bool,
    pub transition_delay_ms: u64,
    pub wander: WanderSettings,
    pub dialogue: DialogueSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            player_step: config::PLAYER_STEP,
            normalize_diagonal: false,
            transition_delay_ms: config::TRANSITION_DELAY_MS,
            wander: WanderSettings::default(),
            dialogue: DialogueSettings::default(),
        }
    }
}

impl Settings {
    /// Loads and validates settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> IslandResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> IslandResult<()> {
        if !(self.player_step > 0.0) {
            return Err(IslandError::Config(format!(
                "player_step must be positive, got {}",
                self.player_step
            )));
        }
        if !(self.wander.speed > 0.0) {
            return Err(IslandError::Config(format!(
                "wander.speed must be positive, got {}",
                self.wander.speed
            )));
        }
        if !(0.0..=1.0).contains(&self.wander.chance) {
            return Err(IslandError::Config(format!(
                "wander.chance must be within [0, 1], got {}",
                self.wander.chance
            )));
        }
        if self.wander.radius < 0.0 {
            return Err(IslandError::Config("wander.radius must not be negative".to_string()));
        }
        if self.wander.margin < 0.0 || self.wander.margin * 2.0 > config::GRID_SIZE {
            return Err(IslandError::Config(format!(
                "wander.margin must be within [0, {}], got {}",
                config::GRID_SIZE / 2.0,
                self.wander.margin
            )));
        }
        Ok(())
    }

    pub fn step_rules(&self) -> StepRules {
        StepRules {
            step: self.player_step,
            normalize_diagonal: self.normalize_diagonal,
        }
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.player_step, 0.7);
        assert_eq!(settings.wander.speed, 1.5);
        assert_eq!(settings.wander.chance, 0.005);
        assert_eq!(settings.transition_delay(), Duration::from_millis(1000));
        assert!(!settings.normalize_diagonal);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "seed": 42, "wander": {{ "chance": 0.5 }} }}"#).unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.wander.chance, 0.5);
        assert_eq!(settings.wander.speed, 1.5);
        assert_eq!(settings.dialogue.api_key_env, "API_KEY");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut settings = Settings::default();
        settings.wander.chance = 1.5;
        assert!(matches!(settings.validate(), Err(IslandError::Config(_))));

        let mut settings = Settings::default();
        settings.player_step = 0.0;
        assert!(matches!(settings.validate(), Err(IslandError::Config(_))));

        let mut settings = Settings::default();
        settings.wander.margin = 20.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_serde_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(Settings::load(file.path()), Err(IslandError::Serde(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(Settings::load(missing), Err(IslandError::Io(_))));
    }
}
