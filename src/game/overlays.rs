//! # Overlays
//!
//! Modal UI state that gates player input: the title menu, pocket, map,
//! wardrobe, shop, blocking notices and the dialogue panel.

use crate::dialogue::DialogueLine;
use crate::game::Villager;
use uuid::Uuid;

/// A blocking message from an interior resident.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub speaker: String,
    pub text: String,
}

/// An open conversation.
///
/// `ticket` identifies the generation request this panel is waiting on;
/// replies carrying any other ticket are stale and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DialoguePanel {
    pub villager: Villager,
    pub ticket: Uuid,
    pub line: Option<DialogueLine>,
}

impl DialoguePanel {
    pub fn is_loading(&self) -> bool {
        self.line.is_none()
    }
}

/// Which full-screen panel a toggle refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Inventory,
    Map,
    Wardrobe,
    Shop,
}

/// All modal flags for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlays {
    pub menu_open: bool,
    pub inventory: bool,
    pub map: bool,
    pub wardrobe: bool,
    pub shop: bool,
    pub notice: Option<Notice>,
    pub dialogue: Option<DialoguePanel>,
    /// Highlighted row in the shop or wardrobe list
    pub cursor: usize,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            menu_open: true,
            inventory: false,
            map: false,
            wardrobe: false,
            shop: false,
            notice: None,
            dialogue: None,
            cursor: 0,
        }
    }
}

impl Overlays {
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Inventory => self.inventory,
            Panel::Map => self.map,
            Panel::Wardrobe => self.wardrobe,
            Panel::Shop => self.shop,
        }
    }

    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Inventory => &mut self.inventory,
            Panel::Map => &mut self.map,
            Panel::Wardrobe => &mut self.wardrobe,
            Panel::Shop => &mut self.shop,
        }
    }

    /// Opens or closes a panel, resetting the list cursor.
    pub fn set(&mut self, panel: Panel, open: bool) {
        *self.flag_mut(panel) = open;
        self.cursor = 0;
    }

    /// Any full-screen panel other than `except` is open.
    pub fn other_panel_open(&self, except: Panel) -> bool {
        [Panel::Inventory, Panel::Map, Panel::Wardrobe, Panel::Shop]
            .into_iter()
            .any(|p| p != except && self.is_open(p))
    }

    /// Walking is locked while any modal is up.
    pub fn blocks_movement(&self) -> bool {
        self.menu_open
            || self.inventory
            || self.map
            || self.wardrobe
            || self.shop
            || self.notice.is_some()
    }

    /// The interact command is locked by the menu, map and notices.
    pub fn blocks_interaction(&self) -> bool {
        self.menu_open || self.map || self.notice.is_some()
    }

    /// Panel toggles and the exit button wait for the menu and notices.
    pub fn blocks_toggles(&self) -> bool {
        self.menu_open || self.notice.is_some()
    }

    /// Closes the top-most modal. Returns false if nothing was open.
    pub fn close_top(&mut self) -> bool {
        if self.notice.take().is_some() {
            return true;
        }
        for panel in [Panel::Shop, Panel::Wardrobe, Panel::Map, Panel::Inventory] {
            if self.is_open(panel) {
                self.set(panel, false);
                return true;
            }
        }
        self.dialogue.take().is_some()
    }
}
