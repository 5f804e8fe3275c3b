//! # Session
//!
//! The explicitly owned simulation context. A [`Session`] holds the world
//! state together with everything that gates or drives it: modal overlays,
//! the transition controller, the wander RNG and tuning.
//!
//! Frame updates go through [`Session::tick`]; discrete player commands go
//! through the other methods. Each call is a single writer on the state.
//! Side effects that leave the simulation (dialogue requests, log lines for
//! the HUD) are queued as [`GameEvent`]s for the caller to drain.

use crate::dialogue::{DialogueLine, DialogueRequest};
use crate::game::{
    advance_villagers, resolve_interaction, resolve_step, Arrival, DialoguePanel, Direction,
    GameState, Interaction, Location, Notice, Overlays, Panel, Position, StepRules,
    TransitionController, Villager,
};
use crate::generation::{shop_catalog, slot_of, CatalogEntry, WearSlot};
use crate::settings::{Settings, WanderSettings};
use crate::{IslandError, IslandResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use uuid::Uuid;

/// Something the simulation wants the outside world to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The title menu was dismissed
    Started,
    /// A location change began toward `destination`
    TransitionStarted { destination: Location },
    /// A location change completed
    Arrived(Arrival),
    /// A resident spoke a fixed line
    NoticeShown(Notice),
    ShopOpened,
    /// A conversation opened; the caller should generate its line
    DialogueRequested { ticket: Uuid, request: DialogueRequest },
    Purchased(CatalogEntry),
    Equipped(String),
}

impl GameEvent {
    /// One-line HUD message for the event, if it deserves one.
    pub fn describe(&self) -> Option<String> {
        match self {
            GameEvent::Started => Some("Welcome to the island!".to_string()),
            GameEvent::TransitionStarted { .. } => None,
            GameEvent::Arrived(arrival) => Some(format!("You arrive at {}.", arrival.location.display_name())),
            GameEvent::NoticeShown(_) | GameEvent::ShopOpened => None,
            GameEvent::DialogueRequested { request, .. } => Some(format!("You talk to {}.", request.name)),
            GameEvent::Purchased(entry) => Some(format!("Bought {} for {} bells.", entry.item, entry.price)),
            GameEvent::Equipped(item) => Some(format!("Now wearing {}.", item)),
        }
    }
}

/// One running game.
pub struct Session {
    pub state: GameState,
    pub overlays: Overlays,
    /// Welcome line for the title screen, once generated
    pub greeting: Option<String>,
    transitions: TransitionController,
    rng: StdRng,
    wander: WanderSettings,
    step_rules: StepRules,
    events: Vec<GameEvent>,
}

impl Session {
    /// Starts a fresh island with the given settings.
    pub fn new(settings: &Settings) -> Self {
        Self::with_state(GameState::new(), settings)
    }

    /// Wraps an existing state.
    pub fn with_state(state: GameState, settings: &Settings) -> Self {
        let rng = match settings.seed {
            Some(seed) => {
                log::info!("Seeding villager wandering with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            state,
            overlays: Overlays::default(),
            greeting: None,
            transitions: TransitionController::new(settings.transition_delay()),
            rng,
            wander: settings.wander.clone(),
            step_rules: settings.step_rules(),
            events: Vec::new(),
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitions.is_transitioning()
    }

    /// Fraction of the pending transition already elapsed.
    pub fn transition_progress(&self) -> f32 {
        self.transitions.progress()
    }

    pub fn transition_destination(&self) -> Option<Location> {
        self.transitions.destination()
    }

    /// Takes every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Dismisses the title menu.
    pub fn start_game(&mut self) -> bool {
        if !self.overlays.menu_open {
            return false;
        }
        self.overlays.menu_open = false;
        self.events.push(GameEvent::Started);
        true
    }

    /// Advances the simulation by one frame of `dt`.
    ///
    /// Completes a pending transition once its delay has run out, then
    /// lets villagers wander if the player is on the main island. Returns
    /// true and bumps the state revision only when something changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut changed = false;

        if let Some(arrival) = self.transitions.advance(dt) {
            self.state.location = arrival.location;
            self.state.player_pos = arrival.player_pos;
            log::info!(
                "Arrived at {} ({:.1}, {:.1})",
                arrival.location.display_name(),
                arrival.player_pos.x,
                arrival.player_pos.y
            );
            self.events.push(GameEvent::Arrived(arrival));
            changed = true;
        }

        if self.state.location.is_main() {
            changed |= advance_villagers(
                &mut self.state.villagers,
                dt.as_secs_f32(),
                &self.wander,
                &mut self.rng,
            );
        }

        if changed {
            self.state.revision += 1;
        }
        changed
    }

    /// Moves the player one step. Returns false when the move was locked
    /// or would leave the island.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        if self.transitions.is_transitioning() || self.overlays.blocks_movement() {
            return false;
        }
        match resolve_step(self.state.player_pos, direction, &self.step_rules) {
            Some(next) => {
                self.state.player_pos = next;
                self.state.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Runs the interact command. Returns true if anything fired.
    pub fn interact(&mut self) -> bool {
        if self.transitions.is_transitioning() || self.overlays.blocks_interaction() {
            return false;
        }
        let Some(interaction) = resolve_interaction(&self.state) else {
            log::debug!(
                "Nothing to interact with at ({:.1}, {:.1})",
                self.state.player_pos.x,
                self.state.player_pos.y
            );
            return false;
        };

        match interaction {
            Interaction::LeaveLocation => self.leave_location(),
            Interaction::EnterLocation(location) => self.enter_location(location),
            Interaction::Notice { speaker, text } => {
                let notice = Notice {
                    speaker: speaker.to_string(),
                    text: text.to_string(),
                };
                self.overlays.notice = Some(notice.clone());
                self.events.push(GameEvent::NoticeShown(notice));
                true
            }
            Interaction::OpenShop => {
                if self.overlays.other_panel_open(Panel::Shop) {
                    return false;
                }
                self.overlays.set(Panel::Shop, true);
                self.events.push(GameEvent::ShopOpened);
                true
            }
            Interaction::Talk { villager, message } => {
                self.open_dialogue(villager, message);
                true
            }
        }
    }

    fn enter_location(&mut self, location: Location) -> bool {
        if !self.transitions.enter(location) {
            return false;
        }
        log::info!("Heading into {}", location.display_name());
        self.events.push(GameEvent::TransitionStarted { destination: location });
        true
    }

    /// Starts the walk back to the main island from any interior,
    /// wherever the player stands.
    pub fn leave_location(&mut self) -> bool {
        let from = self.state.location;
        if from.is_main() || self.overlays.blocks_toggles() || !self.transitions.leave(from) {
            return false;
        }
        log::info!("Leaving {}", from.display_name());
        self.events.push(GameEvent::TransitionStarted {
            destination: Location::Main,
        });
        true
    }

    /// Opens a conversation and queues the generation request.
    ///
    /// Any panel already waiting is superseded; its reply will no longer
    /// match and is dropped on arrival.
    pub fn open_dialogue(&mut self, villager: Villager, message: Option<String>) -> Uuid {
        let ticket = Uuid::new_v4();
        let request = DialogueRequest::for_villager(&villager, message);
        log::debug!("Opening dialogue {} with {}", ticket, villager.name);
        self.overlays.dialogue = Some(DialoguePanel {
            villager,
            ticket,
            line: None,
        });
        self.events.push(GameEvent::DialogueRequested { ticket, request });
        ticket
    }

    /// Delivers a generated line. Returns false if the panel it was meant
    /// for is gone or already answered.
    pub fn accept_dialogue(&mut self, ticket: Uuid, line: DialogueLine) -> bool {
        match self.overlays.dialogue.as_mut() {
            Some(panel) if panel.ticket == ticket && panel.is_loading() => {
                panel.line = Some(line);
                true
            }
            _ => {
                log::debug!("Dropping stale dialogue reply {}", ticket);
                false
            }
        }
    }

    pub fn close_dialogue(&mut self) -> bool {
        self.overlays.dialogue.take().is_some()
    }

    /// Opens or closes a full-screen panel.
    ///
    /// Ignored on the title screen, during a transition, or while a
    /// different panel is already up.
    pub fn toggle(&mut self, panel: Panel) -> bool {
        if self.overlays.blocks_toggles()
            || self.transitions.is_transitioning()
            || self.overlays.other_panel_open(panel)
        {
            return false;
        }
        let open = !self.overlays.is_open(panel);
        self.overlays.set(panel, open);
        true
    }

    /// Closes whatever modal is on top.
    pub fn close_top(&mut self) -> bool {
        self.overlays.close_top()
    }

    /// Moves the list cursor of the open shop or wardrobe, wrapping around.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = if self.overlays.shop {
            shop_catalog().len()
        } else if self.overlays.wardrobe {
            self.wardrobe_entries().len()
        } else {
            return;
        };
        if len == 0 {
            return;
        }
        let len = len as isize;
        self.overlays.cursor = (self.overlays.cursor as isize + delta).rem_euclid(len) as usize;
    }

    /// Buys a wardrobe item from the shop.
    pub fn buy(&mut self, item: &str) -> IslandResult<CatalogEntry> {
        let entry = shop_catalog()
            .into_iter()
            .find(|e| e.item == item)
            .ok_or_else(|| IslandError::UnknownItem(item.to_string()))?;

        let wardrobe = &mut self.state.wardrobe;
        if wardrobe.owns(entry.item) {
            return Err(IslandError::AlreadyOwned(entry.item.to_string()));
        }
        if self.state.bells < entry.price {
            return Err(IslandError::InsufficientBells {
                price: entry.price,
                balance: self.state.bells,
            });
        }

        self.state.bells -= entry.price;
        match entry.slot {
            WearSlot::Outfit => wardrobe.owned_outfits.push(entry.item.to_string()),
            WearSlot::Accessory => wardrobe.owned_accessories.push(entry.item.to_string()),
        }
        self.state.revision += 1;
        log::info!("Bought {} for {} bells, {} left", entry.item, entry.price, self.state.bells);
        self.events.push(GameEvent::Purchased(entry));
        Ok(entry)
    }

    /// Buys the catalog row under `index`.
    pub fn buy_at(&mut self, index: usize) -> IslandResult<CatalogEntry> {
        let item = shop_catalog()
            .get(index)
            .map(|e| e.item)
            .ok_or_else(|| IslandError::UnknownItem(format!("catalog row {}", index)))?;
        self.buy(item)
    }

    /// Owned outfits followed by owned accessories.
    pub fn wardrobe_entries(&self) -> Vec<String> {
        let wardrobe = &self.state.wardrobe;
        wardrobe
            .owned_outfits
            .iter()
            .chain(wardrobe.owned_accessories.iter())
            .cloned()
            .collect()
    }

    /// Wears an owned item. Equipping the accessory already worn takes it off.
    pub fn equip(&mut self, item: &str) -> IslandResult<()> {
        let slot = slot_of(item).ok_or_else(|| IslandError::UnknownItem(item.to_string()))?;
        let wardrobe = &mut self.state.wardrobe;
        if !wardrobe.owns(item) {
            return Err(IslandError::InvalidAction(format!("{} is not in the wardrobe", item)));
        }
        match slot {
            WearSlot::Outfit => wardrobe.outfit = item.to_string(),
            WearSlot::Accessory => {
                if wardrobe.accessory.as_deref() == Some(item) {
                    wardrobe.accessory = None;
                } else {
                    wardrobe.accessory = Some(item.to_string());
                }
            }
        }
        self.state.revision += 1;
        self.events.push(GameEvent::Equipped(item.to_string()));
        Ok(())
    }

    /// Equips the wardrobe row under `index`.
    pub fn equip_at(&mut self, index: usize) -> IslandResult<()> {
        let item = self
            .wardrobe_entries()
            .into_iter()
            .nth(index)
            .ok_or_else(|| IslandError::UnknownItem(format!("wardrobe row {}", index)))?;
        self.equip(&item)
    }

    /// Where the player currently stands.
    pub fn player_pos(&self) -> Position {
        self.state.player_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ITEM_PRICE;

    fn settings() -> Settings {
        Settings {
            seed: Some(7),
            ..Settings::default()
        }
    }

    fn started() -> Session {
        let mut session = Session::new(&settings());
        session.start_game();
        session.drain_events();
        session
    }

    #[test]
    fn test_menu_locks_movement_until_started() {
        let mut session = Session::new(&settings());
        assert!(!session.move_player(Direction::EAST));
        assert!(session.start_game());
        assert!(!session.start_game());
        assert!(session.move_player(Direction::EAST));
        assert_eq!(session.player_pos(), Position::new(15.7, 15.0));
    }

    #[test]
    fn test_leaving_shop_lands_outside_able_sisters() {
        let mut session = started();
        session.state.location = Location::Shop;
        session.state.player_pos = Position::new(6.0, 11.0);

        assert!(session.interact());
        assert!(session.is_transitioning());
        assert!(!session.move_player(Direction::NORTH));
        assert!(!session.interact());

        session.tick(Duration::from_millis(500));
        assert_eq!(session.state.location, Location::Shop);
        session.tick(Duration::from_millis(500));
        assert!(!session.is_transitioning());
        assert_eq!(session.state.location, Location::Main);
        assert_eq!(session.player_pos(), Position::new(22.0, 24.0));
    }

    #[test]
    fn test_shop_entry_wins_over_general_store() {
        let mut session = started();
        session.state.island_items[2].position = Position::new(23.0, 22.0);
        session.state.player_pos = Position::new(22.5, 23.0);

        assert!(session.interact());
        assert_eq!(session.transition_destination(), Some(Location::Shop));
    }

    #[test]
    fn test_second_transition_ignored() {
        let mut session = started();
        session.state.location = Location::Museum;
        assert!(session.leave_location());
        assert!(!session.leave_location());
        session.tick(Duration::from_secs(1));
        assert_eq!(session.player_pos(), Position::new(24.0, 18.0));
        assert!(!session.leave_location());
    }

    #[test]
    fn test_talk_opens_loading_panel_then_accepts_reply() {
        let mut session = started();
        session.state.player_pos = Position::new(5.5, 5.0);
        assert!(session.interact());

        let ticket = match session.drain_events().as_slice() {
            [GameEvent::DialogueRequested { ticket, request }] => {
                assert_eq!(request.name, "Apollo");
                *ticket
            }
            other => panic!("unexpected events {:?}", other),
        };
        assert!(session.overlays.dialogue.as_ref().is_some_and(|p| p.is_loading()));

        assert!(session.accept_dialogue(ticket, DialogueLine::fallback()));
        let panel = session.overlays.dialogue.as_ref().unwrap();
        assert!(!panel.is_loading());
        assert_eq!(panel.line.as_ref().unwrap().text, "Oh, hello there! Nice weather today.");
    }

    #[test]
    fn test_stale_reply_dropped_after_close() {
        let mut session = started();
        let villager = session.state.villagers[2].clone();
        let ticket = session.open_dialogue(villager, None);
        assert!(session.close_dialogue());
        assert!(!session.accept_dialogue(ticket, DialogueLine::fallback()));
        assert!(session.overlays.dialogue.is_none());
    }

    #[test]
    fn test_superseded_reply_dropped() {
        let mut session = started();
        let apollo = session.state.villagers[0].clone();
        let goldie = session.state.villagers[1].clone();
        let first = session.open_dialogue(apollo, None);
        let second = session.open_dialogue(goldie, None);
        assert!(!session.accept_dialogue(first, DialogueLine::new("old", "neutral")));
        assert!(session.accept_dialogue(second, DialogueLine::new("new", "happy")));
        assert_eq!(session.overlays.dialogue.unwrap().villager.name, "Goldie");
    }

    #[test]
    fn test_notice_blocks_until_closed() {
        let mut session = started();
        session.state.location = Location::ResidentServices;
        session.state.player_pos = Position::new(3.5, 8.0);
        assert!(session.interact());
        assert!(session.overlays.notice.is_some());
        assert!(!session.move_player(Direction::EAST));
        assert!(!session.interact());

        assert!(session.close_top());
        assert!(session.move_player(Direction::EAST));
    }

    #[test]
    fn test_notice_holds_panels_and_exit() {
        let mut session = started();
        session.state.location = Location::ResidentServices;
        session.state.player_pos = Position::new(3.5, 8.0);
        assert!(session.interact());

        assert!(!session.toggle(Panel::Inventory));
        assert!(!session.toggle(Panel::Map));
        assert!(!session.toggle(Panel::Wardrobe));
        assert!(!session.leave_location());
        session.tick(Duration::from_millis(1000));
        assert_eq!(session.state.location, Location::ResidentServices);
        assert!(!session.overlays.inventory);

        assert!(session.close_top());
        assert!(session.leave_location());
    }

    #[test]
    fn test_mable_waits_for_wardrobe_to_close() {
        let mut session = started();
        session.state.location = Location::Shop;
        session.state.player_pos = Position::new(4.0, 3.0);
        assert!(session.toggle(Panel::Wardrobe));

        assert!(!session.interact());
        assert!(!session.overlays.shop);
        assert!(session.overlays.wardrobe);

        assert!(session.toggle(Panel::Wardrobe));
        assert!(session.interact());
        assert!(session.overlays.shop);
    }

    #[test]
    fn test_toggles_ignored_during_transition() {
        let mut session = started();
        session.state.location = Location::NookCranny;
        assert!(session.leave_location());
        assert!(!session.toggle(Panel::Inventory));
        assert!(!session.overlays.inventory);
    }

    #[test]
    fn test_inventory_toggle_locks_movement() {
        let mut session = started();
        assert!(session.toggle(Panel::Inventory));
        assert!(!session.move_player(Direction::SOUTH));
        assert!(!session.toggle(Panel::Map));
        assert!(session.toggle(Panel::Inventory));
        assert!(session.move_player(Direction::SOUTH));
    }

    #[test]
    fn test_villagers_only_wander_on_main_island() {
        let mut tuning = settings();
        tuning.wander.chance = 1.0;
        let mut session = Session::new(&tuning);
        session.state.location = Location::Museum;
        let before = session.state.villagers.clone();
        assert!(!session.tick(Duration::from_millis(16)));
        assert_eq!(session.state.villagers, before);

        session.state.location = Location::Main;
        assert!(session.tick(Duration::from_millis(16)));
        assert!(session.state.villagers.iter().all(|v| v.is_wandering()));
        assert_eq!(session.state.revision, 1);
    }

    #[test]
    fn test_buy_and_equip() {
        let mut session = started();
        let entry = session.buy("🎩").unwrap();
        assert_eq!(entry.slot, WearSlot::Accessory);
        assert_eq!(session.state.bells, 5000 - ITEM_PRICE);

        assert!(matches!(session.buy("🎩"), Err(IslandError::AlreadyOwned(_))));
        assert!(matches!(session.buy("🍕"), Err(IslandError::UnknownItem(_))));

        session.equip("🎩").unwrap();
        assert_eq!(session.state.wardrobe.accessory.as_deref(), Some("🎩"));
        session.equip("🎩").unwrap();
        assert_eq!(session.state.wardrobe.accessory, None);

        assert!(matches!(session.equip("👘"), Err(IslandError::InvalidAction(_))));
    }

    #[test]
    fn test_buy_without_bells() {
        let mut session = started();
        session.state.bells = 499;
        assert!(matches!(
            session.buy("👘"),
            Err(IslandError::InsufficientBells { price: 500, balance: 499 })
        ));
        assert_eq!(session.state.bells, 499);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut session = started();
        session.overlays.set(Panel::Wardrobe, true);
        session.move_cursor(-1);
        assert_eq!(session.overlays.cursor, 1);
        session.move_cursor(1);
        assert_eq!(session.overlays.cursor, 0);
        session.equip_at(1).unwrap();
        assert_eq!(session.state.wardrobe.outfit, "👗");
    }
}
