//! # Locations
//!
//! The main island and the named interiors, with the fixed coordinates used
//! when entering and leaving them and the residents that live inside.

use crate::game::{Personality, Position};
use serde::{Deserialize, Serialize};

/// The scene the player currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Main,
    Shop,
    NookCranny,
    ResidentServices,
    Museum,
}

/// What happens when the player engages an interior resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcRole {
    /// Shows a blocking informational message
    Notice(&'static str),
    /// Opens the shop panel
    Shopkeeper,
    /// Starts a generated conversation with the given opening line
    Guide {
        id: &'static str,
        species: &'static str,
        personality: Personality,
        icon: &'static str,
        color: &'static str,
        prompt: &'static str,
    },
}

/// A resident fixed inside an interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteriorNpc {
    pub name: &'static str,
    pub position: Position,
    /// Interaction reach in grid units
    pub radius: f32,
    pub role: NpcRole,
}

/// Where the interior exit sits and how close the player must be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitZone {
    pub center: Position,
    pub radius: f32,
}

const DEFAULT_ENTRY: Position = Position::new(6.0, 11.0);
const DEFAULT_EXIT: ExitZone = ExitZone {
    center: Position::new(6.0, 12.0),
    radius: 2.5,
};

static RESIDENT_SERVICES_NPCS: [InteriorNpc; 2] = [
    InteriorNpc {
        name: "Tom Nook",
        position: Position::new(3.5, 8.5),
        radius: 2.0,
        role: NpcRole::Notice("Tom Nook: Hello! Thinking about island infrastructure, yes yes?"),
    },
    InteriorNpc {
        name: "Isabelle",
        position: Position::new(8.5, 8.5),
        radius: 2.0,
        role: NpcRole::Notice("Isabelle: Hello there! I'm here to help with your island's rating!"),
    },
];

static SHOP_NPCS: [InteriorNpc; 1] = [InteriorNpc {
    name: "Mable",
    position: Position::new(4.0, 2.0),
    radius: 2.0,
    role: NpcRole::Shopkeeper,
}];

static MUSEUM_NPCS: [InteriorNpc; 1] = [InteriorNpc {
    name: "Blathers",
    position: Position::new(15.0, 22.0),
    radius: 2.5,
    role: NpcRole::Guide {
        id: "blathers",
        species: "Owl",
        personality: Personality::Normal,
        icon: "🦉",
        color: "#451a03",
        prompt: "Tell me about the museum!",
    },
}];

impl Location {
    /// All interiors reachable from the main island.
    pub const INTERIORS: [Location; 4] = [
        Location::Shop,
        Location::NookCranny,
        Location::ResidentServices,
        Location::Museum,
    ];

    pub fn is_main(self) -> bool {
        self == Location::Main
    }

    /// Where the player appears after entering this location.
    pub fn entry_point(self) -> Position {
        match self {
            Location::Museum => Position::new(15.0, 25.0),
            Location::Main => Position::center(),
            _ => DEFAULT_ENTRY,
        }
    }

    /// The interior exit, or `None` on the main island.
    pub fn exit_zone(self) -> Option<ExitZone> {
        match self {
            Location::Main => None,
            Location::Museum => Some(ExitZone {
                center: Position::new(15.0, 30.0),
                radius: 4.0,
            }),
            _ => Some(DEFAULT_EXIT),
        }
    }

    /// Where the player stands on the main island after leaving this location.
    pub fn return_point(self) -> Position {
        match self {
            Location::Shop => Position::new(22.0, 24.0),
            Location::NookCranny => Position::new(8.0, 14.0),
            Location::ResidentServices => Position::new(15.0, 11.0),
            Location::Museum => Position::new(24.0, 18.0),
            Location::Main => Position::center(),
        }
    }

    /// Residents in scan order.
    pub fn residents(self) -> &'static [InteriorNpc] {
        match self {
            Location::ResidentServices => &RESIDENT_SERVICES_NPCS,
            Location::Shop => &SHOP_NPCS,
            Location::Museum => &MUSEUM_NPCS,
            Location::Main | Location::NookCranny => &[],
        }
    }

    /// Human-readable name for banners and logs.
    pub fn display_name(self) -> &'static str {
        match self {
            Location::Main => "Island",
            Location::Shop => "Able Sisters",
            Location::NookCranny => "Nook's Cranny",
            Location::ResidentServices => "Resident Services",
            Location::Museum => "Museum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_points() {
        assert_eq!(Location::Shop.return_point(), Position::new(22.0, 24.0));
        assert_eq!(Location::NookCranny.return_point(), Position::new(8.0, 14.0));
        assert_eq!(
            Location::ResidentServices.return_point(),
            Position::new(15.0, 11.0)
        );
        assert_eq!(Location::Museum.return_point(), Position::new(24.0, 18.0));
    }

    #[test]
    fn test_entry_points() {
        assert_eq!(Location::Museum.entry_point(), Position::new(15.0, 25.0));
        for loc in [Location::Shop, Location::NookCranny, Location::ResidentServices] {
            assert_eq!(loc.entry_point(), Position::new(6.0, 11.0));
        }
    }

    #[test]
    fn test_exit_zones() {
        assert!(Location::Main.exit_zone().is_none());
        let museum = Location::Museum.exit_zone().unwrap();
        assert_eq!(museum.radius, 4.0);
        let shop = Location::Shop.exit_zone().unwrap();
        assert_eq!(shop.center, Position::new(6.0, 12.0));
        assert_eq!(shop.radius, 2.5);
        assert!(Location::INTERIORS.iter().all(|l| l.exit_zone().is_some()));
    }

    #[test]
    fn test_residents() {
        assert!(Location::Main.residents().is_empty());
        assert!(Location::NookCranny.residents().is_empty());
        assert_eq!(Location::ResidentServices.residents()[0].name, "Tom Nook");
        assert_eq!(Location::Shop.residents()[0].role, NpcRole::Shopkeeper);
    }

    #[test]
    fn test_location_serialization() {
        let json = serde_json::to_string(&Location::ResidentServices).unwrap();
        assert_eq!(json, "\"resident_services\"");
    }
}
