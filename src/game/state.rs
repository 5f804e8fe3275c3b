//! # Game State Module
//!
//! The world state store: one owned snapshot of everything the simulation
//! knows about the island.
//!
//! Every controller reads and writes a [`GameState`]; the renderer only
//! reads it. Invariants kept here:
//! - `player_pos` and every villager position stay within `[0, GRID_SIZE]`
//! - only the main island has roaming villagers and placed items; interiors
//!   carry their own fixed residents (see [`crate::Location`])

use crate::config::{GRID_SIZE, STARTING_BELLS};
use crate::game::{Location, Position};
use crate::generation::{initial_inventory, initial_island_items, initial_villagers};
use crate::{IslandError, IslandResult};
use serde::{Deserialize, Serialize};

/// Closed set of world object kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Tree,
    Flower,
    Rock,
    Tent,
    Furniture,
    Fossil,
    Fruit,
    House,
    Fish,
    Tool,
    Crop,
    Seed,
    Shop,
    GeneralStore,
    TownHall,
    Museum,
}

/// An object placed on the main island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IslandItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,
    pub icon: String,
    pub position: Position,
    /// Roof colour for buildings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_color: Option<String>,
    /// Villager id (or `"player"`) for houses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// A stack of identical items in the player's pocket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u32,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// Villager temperament, forwarded to dialogue generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Lazy,
    Jock,
    Snooty,
    Cranky,
    Peppy,
    Normal,
}

impl Personality {
    pub fn as_str(self) -> &'static str {
        match self {
            Personality::Lazy => "lazy",
            Personality::Jock => "jock",
            Personality::Snooty => "snooty",
            Personality::Cranky => "cranky",
            Personality::Peppy => "peppy",
            Personality::Normal => "normal",
        }
    }
}

/// A resident of the island.
///
/// The villager list is created once per session and never shrinks; only
/// `position` and `target_position` change while playing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Villager {
    pub id: String,
    pub name: String,
    pub species: String,
    pub personality: Personality,
    pub position: Position,
    /// Present while the villager is walking somewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<Position>,
    pub color: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessory: Option<String>,
}

impl Villager {
    /// Creates an idle villager with no outfit.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        personality: Personality,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            personality,
            position,
            target_position: None,
            color: "#94a3b8".to_string(),
            icon: String::new(),
            outfit: None,
            accessory: None,
        }
    }

    /// Whether the villager currently has a wander target.
    pub fn is_wandering(&self) -> bool {
        self.target_position.is_some()
    }
}

/// Time of day shown on the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayTime {
    Morning,
    Noon,
    Evening,
    Night,
}

impl DayTime {
    pub fn as_str(self) -> &'static str {
        match self {
            DayTime::Morning => "morning",
            DayTime::Noon => "noon",
            DayTime::Evening => "evening",
            DayTime::Night => "night",
        }
    }
}

/// Cosmetic ownership and the current selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wardrobe {
    pub owned_outfits: Vec<String>,
    pub owned_accessories: Vec<String>,
    pub outfit: String,
    /// `None` when no accessory is worn
    pub accessory: Option<String>,
}

impl Default for Wardrobe {
    fn default() -> Self {
        Self {
            owned_outfits: vec!["👕".to_string(), "👗".to_string()],
            owned_accessories: Vec::new(),
            outfit: "👕".to_string(),
            accessory: None,
        }
    }
}

impl Wardrobe {
    pub fn owns(&self, item: &str) -> bool {
        self.owned_outfits.iter().any(|o| o == item)
            || self.owned_accessories.iter().any(|a| a == item)
    }
}

/// Central simulation snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub player_pos: Position,
    pub island_items: Vec<IslandItem>,
    pub inventory: Vec<InventoryItem>,
    pub villagers: Vec<Villager>,
    pub day_time: DayTime,
    pub bells: u32,
    pub location: Location,
    pub wardrobe: Wardrobe,
    /// Bumped whenever a frame update changed anything
    #[serde(skip)]
    pub revision: u64,
}

impl GameState {
    /// Creates the starting island: seed villagers and items, player in the
    /// centre, noon, 5000 bells.
    ///
    /// # Examples
    ///
    /// ```
    /// use island_horizons::{GameState, Location, Position};
    ///
    /// let state = GameState::new();
    /// assert_eq!(state.location, Location::Main);
    /// assert_eq!(state.player_pos, Position::new(15.0, 15.0));
    /// assert_eq!(state.villagers.len(), 8);
    /// ```
    pub fn new() -> Self {
        Self::with_content(initial_villagers(), initial_island_items())
    }

    /// Creates a starting state around the given villagers and items.
    pub fn with_content(villagers: Vec<Villager>, island_items: Vec<IslandItem>) -> Self {
        Self {
            player_pos: Position::center(),
            island_items,
            inventory: initial_inventory(),
            villagers,
            day_time: DayTime::Noon,
            bells: STARTING_BELLS,
            location: Location::Main,
            wardrobe: Wardrobe::default(),
            revision: 0,
        }
    }

    /// Looks up a villager by id.
    pub fn villager(&self, id: &str) -> Option<&Villager> {
        self.villagers.iter().find(|v| v.id == id)
    }

    /// Checks the positional invariants of the store.
    pub fn check_invariants(&self) -> IslandResult<()> {
        if !self.player_pos.is_within_grid() {
            return Err(IslandError::InvalidState(format!(
                "player at {:?} is outside the {}x{} grid",
                self.player_pos, GRID_SIZE, GRID_SIZE
            )));
        }
        if let Some(v) = self.villagers.iter().find(|v| !v.position.is_within_grid()) {
            return Err(IslandError::InvalidState(format!(
                "villager {} at {:?} is outside the grid",
                v.id, v.position
            )));
        }
        Ok(())
    }

    /// Serializes the snapshot as pretty JSON.
    pub fn to_json(&self) -> IslandResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_creation() {
        let state = GameState::new();
        assert_eq!(state.bells, 5000);
        assert_eq!(state.day_time, DayTime::Noon);
        assert_eq!(state.location, Location::Main);
        assert_eq!(state.inventory.len(), 3);
        assert_eq!(state.wardrobe.outfit, "👕");
        assert!(state.wardrobe.accessory.is_none());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_villager_lookup() {
        let state = GameState::new();
        let apollo = state.villager("v1").unwrap();
        assert_eq!(apollo.name, "Apollo");
        assert_eq!(apollo.personality, Personality::Cranky);
        assert!(!apollo.is_wandering());
        assert!(state.villager("nobody").is_none());
    }

    #[test]
    fn test_invariant_violation_reported() {
        let mut state = GameState::new();
        state.villagers[0].position = Position::new(-1.0, 3.0);
        assert!(matches!(
            state.check_invariants(),
            Err(IslandError::InvalidState(_))
        ));
    }

    #[test]
    fn test_game_state_serialization() {
        let state = GameState::new();
        let json = state.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["location"], "main");
        assert_eq!(value["islandItems"][1]["type"], "shop");
        assert_eq!(value["villagers"][0]["personality"], "cranky");

        let loaded: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.villagers.len(), state.villagers.len());
    }

    #[test]
    fn test_wardrobe_ownership() {
        let wardrobe = Wardrobe::default();
        assert!(wardrobe.owns("👗"));
        assert!(!wardrobe.owns("🎩"));
    }
}
