//! # Interaction Resolution
//!
//! Decides what the explicit "interact" command does based on where the
//! player stands.
//!
//! Each location has an ordered list of rules. A rule inspects the state and
//! either yields an [`Interaction`] or passes. Rules run in order and the
//! first hit wins; there is no tie-breaking by distance between rules, and
//! within a rule the first candidate in list order wins.

use crate::config::TALK_RADIUS;
use crate::game::{GameState, ItemType, Location, NpcRole, Position, Villager};

/// The single effect chosen by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum Interaction {
    /// Walk out of the current interior
    LeaveLocation,
    /// Walk into a building on the main island
    EnterLocation(Location),
    /// A resident speaks a fixed line
    Notice {
        speaker: &'static str,
        text: &'static str,
    },
    /// The shopkeeper opens the shop panel
    OpenShop,
    /// Start a generated conversation
    Talk {
        villager: Villager,
        message: Option<String>,
    },
}

/// A rule in a location's priority chain.
pub type InteractionRule = fn(&GameState) -> Option<Interaction>;

/// Building kinds that lead somewhere, with their reach, in priority order.
pub const BUILDING_ENTRANCES: [(ItemType, f32, Location); 4] = [
    (ItemType::Shop, 3.0, Location::Shop),
    (ItemType::GeneralStore, 3.0, Location::NookCranny),
    (ItemType::TownHall, 4.0, Location::ResidentServices),
    (ItemType::Museum, 5.0, Location::Museum),
];

static MAIN_ISLAND_RULES: [InteractionRule; 5] = [
    enter_shop,
    enter_general_store,
    enter_town_hall,
    enter_museum,
    talk_to_villager,
];

static INTERIOR_RULES: [InteractionRule; 2] = [leave_through_exit, engage_resident];

/// The priority chain for a location.
pub fn rules_for(location: Location) -> &'static [InteractionRule] {
    if location.is_main() {
        &MAIN_ISLAND_RULES
    } else {
        &INTERIOR_RULES
    }
}

/// Runs the priority chain for the player's current location.
///
/// Returns `None` when nothing is in reach; the command is then swallowed.
///
/// # Examples
///
/// ```
/// use island_horizons::{resolve_interaction, GameState, Interaction, Location, Position};
///
/// let mut state = GameState::new();
/// state.player_pos = Position::new(22.0, 23.0); // next to the Able Sisters
/// assert_eq!(
///     resolve_interaction(&state),
///     Some(Interaction::EnterLocation(Location::Shop))
/// );
/// ```
pub fn resolve_interaction(state: &GameState) -> Option<Interaction> {
    rules_for(state.location).iter().find_map(|rule| rule(state))
}

fn within(a: Position, b: Position, radius: f32) -> bool {
    a.distance(b) < radius
}

fn enter_building(state: &GameState, entrance: usize) -> Option<Interaction> {
    let (item_type, radius, destination) = BUILDING_ENTRANCES[entrance];
    state
        .island_items
        .iter()
        .find(|item| item.item_type == item_type && within(item.position, state.player_pos, radius))
        .map(|_| Interaction::EnterLocation(destination))
}

fn enter_shop(state: &GameState) -> Option<Interaction> {
    enter_building(state, 0)
}

fn enter_general_store(state: &GameState) -> Option<Interaction> {
    enter_building(state, 1)
}

fn enter_town_hall(state: &GameState) -> Option<Interaction> {
    enter_building(state, 2)
}

fn enter_museum(state: &GameState) -> Option<Interaction> {
    enter_building(state, 3)
}

fn talk_to_villager(state: &GameState) -> Option<Interaction> {
    state
        .villagers
        .iter()
        .find(|v| within(v.position, state.player_pos, TALK_RADIUS))
        .map(|v| Interaction::Talk {
            villager: v.clone(),
            message: None,
        })
}

fn leave_through_exit(state: &GameState) -> Option<Interaction> {
    let exit = state.location.exit_zone()?;
    within(exit.center, state.player_pos, exit.radius).then_some(Interaction::LeaveLocation)
}

fn engage_resident(state: &GameState) -> Option<Interaction> {
    let npc = state
        .location
        .residents()
        .iter()
        .find(|npc| within(npc.position, state.player_pos, npc.radius))?;

    Some(match npc.role {
        NpcRole::Notice(text) => Interaction::Notice {
            speaker: npc.name,
            text,
        },
        NpcRole::Shopkeeper => Interaction::OpenShop,
        NpcRole::Guide {
            id,
            species,
            personality,
            icon,
            color,
            prompt,
        } => {
            let mut guide = Villager::new(id, npc.name, species, personality, npc.position);
            guide.icon = icon.to_string();
            guide.color = color.to_string();
            Interaction::Talk {
                villager: guide,
                message: Some(prompt.to_string()),
            }
        }
    })
}
