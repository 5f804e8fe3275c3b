//! # Island Horizons
//!
//! A cozy island life-simulation: the player walks around a small island,
//! villagers wander between random targets, and buildings lead to interiors
//! with their own residents.
//!
//! ## Architecture Overview
//!
//! The crate separates the simulation core from presentation:
//!
//! - **Game State**: a single owned [`GameState`] snapshot of simulation truth
//! - **Session**: the [`Session`] context that owns the state plus overlays,
//!   pending transitions and the random source, and applies player commands
//! - **Controllers**: villager wandering, player movement, interaction
//!   resolution and location transitions, each a small module under [`game`]
//! - **Dialogue**: an opaque text-generation boundary with a fixed fallback
//! - **Rendering**: a macroquad top-down view that only reads the session
//!
//! Data flows one way per frame: input and the frame delta mutate the session,
//! the renderer reads it.

pub mod dialogue;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod settings;

pub use dialogue::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use settings::*;

/// Core error type for the island simulation.
#[derive(thiserror::Error, Debug)]
pub enum IslandError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Settings are malformed or out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Dialogue generation failed
    #[error("Dialogue error: {0}")]
    Dialogue(String),

    /// Not enough bells for a purchase
    #[error("Not enough bells: price {price}, balance {balance}")]
    InsufficientBells { price: u32, balance: u32 },

    /// Wardrobe item is already owned
    #[error("Already owned: {0}")]
    AlreadyOwned(String),

    /// Catalog entry does not exist
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

/// Result type used throughout the island codebase.
pub type IslandResult<T> = Result<T, IslandError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
///
/// These are the tuned defaults; [`Settings`] can override the ones that
/// make sense to adjust at runtime.
pub mod config {
    /// Side length of the square world, in grid units
    pub const GRID_SIZE: f32 = 30.0;

    /// Distance covered by one player movement command
    pub const PLAYER_STEP: f32 = 0.7;

    /// Villager walking speed in grid units per second
    pub const VILLAGER_SPEED: f32 = 1.5;

    /// Per-frame chance that an idle villager picks a new wander target
    pub const WANDER_CHANCE: f64 = 0.005;

    /// Maximum wander offset on each axis
    pub const WANDER_RADIUS: f32 = 5.0;

    /// Wander targets keep this far from the island edge
    pub const WANDER_MARGIN: f32 = 2.0;

    /// Delay between starting a location change and arriving
    pub const TRANSITION_DELAY_MS: u64 = 1000;

    /// Radius for talking to a villager on the main island
    pub const TALK_RADIUS: f32 = 1.5;

    /// Cost of any wardrobe item in the shop
    pub const ITEM_PRICE: u32 = 500;

    /// Bells the player starts with
    pub const STARTING_BELLS: u32 = 5000;

    /// Message sent to a villager when the player opens a conversation
    pub const DEFAULT_PLAYER_MESSAGE: &str = "Hello!";

    /// Dialogue shown when generation fails
    pub const FALLBACK_DIALOGUE_TEXT: &str = "Oh, hello there! Nice weather today.";

    /// Emotion paired with the fallback dialogue
    pub const FALLBACK_DIALOGUE_EMOTION: &str = "happy";

    /// Greeting shown when generation fails
    pub const FALLBACK_GREETING: &str = "Welcome back to your island paradise!";

    /// Frames per second target for the game loop
    pub const TARGET_FPS: u64 = 60;
}
