//! Starting residents, placed objects and pocket contents.

use crate::game::{InventoryItem, IslandItem, ItemType, Personality, Position, Villager};

struct VillagerSeed {
    id: &'static str,
    name: &'static str,
    species: &'static str,
    personality: Personality,
    position: (f32, f32),
    color: &'static str,
    icon: &'static str,
    outfit: &'static str,
}

const VILLAGERS: [VillagerSeed; 8] = [
    VillagerSeed {
        id: "v1",
        name: "Apollo",
        species: "Eagle",
        personality: Personality::Cranky,
        position: (5.0, 5.0),
        color: "#374151",
        icon: "🦅",
        outfit: "👔",
    },
    VillagerSeed {
        id: "v2",
        name: "Goldie",
        species: "Dog",
        personality: Personality::Normal,
        position: (25.0, 8.0),
        color: "#fbbf24",
        icon: "🐕",
        outfit: "👗",
    },
    VillagerSeed {
        id: "v3",
        name: "Bob",
        species: "Cat",
        personality: Personality::Lazy,
        position: (6.0, 24.0),
        color: "#a78bfa",
        icon: "🐈",
        outfit: "👕",
    },
    VillagerSeed {
        id: "v4",
        name: "Rodney",
        species: "Mouse",
        personality: Personality::Snooty,
        position: (12.0, 22.0),
        color: "#94a3b8",
        icon: "🐭",
        outfit: "👘",
    },
    VillagerSeed {
        id: "v5",
        name: "Puddles",
        species: "Frog",
        personality: Personality::Peppy,
        position: (22.0, 5.0),
        color: "#4ade80",
        icon: "🐸",
        outfit: "👗",
    },
    VillagerSeed {
        id: "v6",
        name: "Teddy",
        species: "Bear",
        personality: Personality::Jock,
        position: (18.0, 26.0),
        color: "#92400e",
        icon: "🐻",
        outfit: "🎽",
    },
    VillagerSeed {
        id: "v7",
        name: "Bill",
        species: "Duck",
        personality: Personality::Jock,
        position: (28.0, 15.0),
        color: "#1e3a8a",
        icon: "🦆",
        outfit: "👕",
    },
    VillagerSeed {
        id: "v8",
        name: "Drago",
        species: "Alligator",
        personality: Personality::Lazy,
        position: (4.0, 12.0),
        color: "#166534",
        icon: "🐊",
        outfit: "👘",
    },
];

/// The eight founding residents, idle at their starting spots.
pub fn initial_villagers() -> Vec<Villager> {
    VILLAGERS
        .iter()
        .map(|seed| {
            let (x, y) = seed.position;
            let mut villager =
                Villager::new(seed.id, seed.name, seed.species, seed.personality, Position::new(x, y));
            villager.color = seed.color.to_string();
            villager.icon = seed.icon.to_string();
            villager.outfit = Some(seed.outfit.to_string());
            villager
        })
        .collect()
}

fn building(
    id: &str,
    item_type: ItemType,
    name: &str,
    icon: &str,
    (x, y): (f32, f32),
    (roof, wall): (&str, &str),
    owner: Option<&str>,
) -> IslandItem {
    IslandItem {
        id: id.to_string(),
        item_type,
        name: name.to_string(),
        icon: icon.to_string(),
        position: Position::new(x, y),
        color: Some(roof.to_string()),
        wall_color: Some(wall.to_string()),
        owner_id: owner.map(str::to_string),
    }
}

fn scenery(id: &str, item_type: ItemType, name: &str, icon: &str, (x, y): (f32, f32)) -> IslandItem {
    IslandItem {
        id: id.to_string(),
        item_type,
        name: name.to_string(),
        icon: icon.to_string(),
        position: Position::new(x, y),
        color: None,
        wall_color: None,
        owner_id: None,
    }
}

/// Buildings first (player home, then the four public buildings, then
/// resident homes), followed by trees, rocks and flowers.
///
/// Order matters: interaction scans this list front to back.
pub fn initial_island_items() -> Vec<IslandItem> {
    use ItemType::*;

    let houses = [
        ("h_apollo", "v1", "Apollo's House", (4.0, 4.0), ("#3b82f6", "#e2e8f0")),
        ("h_goldie", "v2", "Goldie's House", (26.0, 7.0), ("#f59e0b", "#fff7ed")),
        ("h_bob", "v3", "Bob's House", (5.0, 25.0), ("#a855f7", "#f3e8ff")),
        ("h_rodney", "v4", "Rodney's House", (13.0, 21.0), ("#64748b", "#f1f5f9")),
        ("h_puddles", "v5", "Puddles' House", (21.0, 4.0), ("#10b981", "#f0fdf4")),
        ("h_teddy", "v6", "Teddy's House", (19.0, 25.0), ("#78350f", "#fff7ed")),
        ("h_bill", "v7", "Bill's House", (27.0, 14.0), ("#1d4ed8", "#eff6ff")),
        ("h_drago", "v8", "Drago's House", (3.0, 11.0), ("#064e3b", "#ecfdf5")),
    ];

    let mut items = vec![
        building("h_player", House, "My Home", "🏠", (15.0, 18.0), ("#ef4444", "#ffffff"), Some("player")),
        building("s_able", Shop, "Able Sisters", "🧥", (22.0, 22.0), ("#166534", "#b91c1c"), None),
        building("s_nook", GeneralStore, "Nook's Cranny", "🍃", (8.0, 12.0), ("#1e3a8a", "#fde047"), None),
        building("s_townhall", TownHall, "Town Hall", "🏛️", (15.0, 8.0), ("#4c1d95", "#fbbf24"), None),
        building("s_museum", Museum, "Museum", "🦉", (24.0, 15.0), ("#94a3b8", "#f1f5f9"), None),
    ];

    items.extend(
        houses
            .into_iter()
            .map(|(id, owner, name, pos, colors)| building(id, House, name, "🏠", pos, colors, Some(owner))),
    );

    items.extend([
        scenery("i2", Tree, "Apple Tree", "🌳", (10.0, 5.0)),
        scenery("i3", Tree, "Apple Tree", "🌳", (20.0, 25.0)),
        scenery("i3b", Tree, "Apple Tree", "🌳", (4.0, 15.0)),
        scenery("i3c", Tree, "Apple Tree", "🌳", (25.0, 15.0)),
        scenery("i4", Rock, "Rock", "🪨", (28.0, 2.0)),
        scenery("i4b", Rock, "Rock", "🪨", (2.0, 28.0)),
        scenery("i5", Flower, "Red Tulips", "🌷", (14.0, 12.0)),
        scenery("i6", Flower, "White Lilies", "🌼", (16.0, 12.0)),
        scenery("i7", Flower, "Blue Roses", "🌹", (15.0, 22.0)),
    ]);

    items
}

/// Pocket contents for a new player.
pub fn initial_inventory() -> Vec<InventoryItem> {
    let stack = |id: &str, name: &str, icon: &str, count: u32, item_type: ItemType| InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        count,
        item_type,
    };
    vec![
        stack("tool_shovel", "Shovel", "🪏", 1, ItemType::Tool),
        stack("tool_can", "Watering Can", "🚿", 1, ItemType::Tool),
        stack("seed_tomato", "Tomato Seeds", "🍅", 5, ItemType::Seed),
    ]
}
