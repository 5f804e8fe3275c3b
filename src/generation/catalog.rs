//! Wardrobe catalog sold at the Able Sisters.

use crate::config::ITEM_PRICE;
use serde::{Deserialize, Serialize};

/// Every outfit the shop stocks.
pub const OUTFITS: [&str; 37] = [
    "👕", "👗", "👔", "👚", "🎽", "🧥", "👘", "🥻", "🧑‍🚀", "🥋", "🩱", "🩲", "🩳", "👙", "🥼", "🦺",
    "🤵", "👰", "🧛", "🧙", "🧝", "🧞", "🧜", "🧚", "🦸", "🦹", "🎅", "🤶", "💂", "👮", "👷", "🕵️",
    "👩‍🍳", "👩‍🌾", "👩‍🔬", "👩‍🎨", "👩‍🚀",
];

/// Every accessory the shop stocks.
pub const ACCESSORIES: [&str; 24] = [
    "👒", "🧢", "🕶️", "👓", "🧣", "🎀", "👑", "🎓", "🎩", "⛑️", "🎭", "🎨", "🎧", "🔭", "🩺", "🛡️",
    "⚔️", "🏹", "🪄", "💎", "📿", "💍", "💄", "🌂",
];

/// Which wardrobe slot a catalog entry fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WearSlot {
    Outfit,
    Accessory,
}

/// One row of the shop list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub item: &'static str,
    pub slot: WearSlot,
    pub price: u32,
}

/// Outfits followed by accessories, all at the same price.
pub fn shop_catalog() -> Vec<CatalogEntry> {
    let outfits = OUTFITS.iter().map(|&item| CatalogEntry {
        item,
        slot: WearSlot::Outfit,
        price: ITEM_PRICE,
    });
    let accessories = ACCESSORIES.iter().map(|&item| CatalogEntry {
        item,
        slot: WearSlot::Accessory,
        price: ITEM_PRICE,
    });
    outfits.chain(accessories).collect()
}

/// Finds the slot an item belongs to, if the shop stocks it.
pub fn slot_of(item: &str) -> Option<WearSlot> {
    if OUTFITS.contains(&item) {
        Some(WearSlot::Outfit)
    } else if ACCESSORIES.contains(&item) {
        Some(WearSlot::Accessory)
    } else {
        None
    }
}
