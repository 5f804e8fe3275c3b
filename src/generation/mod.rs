//! # Generation Module
//!
//! Fixed starting content for a new island: the resident list, placed
//! buildings and decorations, the starting pocket, the wardrobe catalog and
//! the ground tile layout.
//!
//! Nothing here is random. Every session starts from the same island; the
//! session RNG only drives villager wandering.

pub mod catalog;
pub mod island;

pub use catalog::*;
pub use island::*;

use crate::config::GRID_SIZE;
use serde::{Deserialize, Serialize};

/// Ground type of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    Grass,
    Water,
    Sand,
    Dirt,
}

/// Number of tiles along each side of the island.
pub const GRID_TILES: usize = GRID_SIZE as usize;

/// Ground type at tile `(x, y)`.
///
/// The outer ring is sea, the next ring is beach, everything inside is
/// grass. Coordinates past the edge read as water.
///
/// # Examples
///
/// ```
/// use island_horizons::{tile_at, TileType};
///
/// assert_eq!(tile_at(0, 10), TileType::Water);
/// assert_eq!(tile_at(1, 10), TileType::Sand);
/// assert_eq!(tile_at(15, 15), TileType::Grass);
/// ```
pub fn tile_at(x: usize, y: usize) -> TileType {
    let last = GRID_TILES - 1;
    if x >= GRID_TILES || y >= GRID_TILES {
        return TileType::Water;
    }
    if x == 0 || y == 0 || x == last || y == last {
        TileType::Water
    } else if x == 1 || y == 1 || x == last - 1 || y == last - 1 {
        TileType::Sand
    } else {
        TileType::Grass
    }
}

/// The full tile layout, indexed `[y][x]`.
pub fn map_layout() -> Vec<Vec<TileType>> {
    (0..GRID_TILES)
        .map(|y| (0..GRID_TILES).map(|x| tile_at(x, y)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_dimensions() {
        let layout = map_layout();
        assert_eq!(layout.len(), 30);
        assert!(layout.iter().all(|row| row.len() == 30));
    }

    #[test]
    fn test_rings() {
        let layout = map_layout();
        assert_eq!(layout[0][0], TileType::Water);
        assert_eq!(layout[29][15], TileType::Water);
        assert_eq!(layout[28][15], TileType::Sand);
        assert_eq!(layout[1][1], TileType::Sand);
        assert_eq!(layout[2][2], TileType::Grass);
        assert_eq!(layout[27][27], TileType::Grass);
    }

    #[test]
    fn test_out_of_range_is_water() {
        assert_eq!(tile_at(30, 5), TileType::Water);
        assert_eq!(tile_at(5, 100), TileType::Water);
    }

    #[test]
    fn test_no_dirt_on_fresh_island() {
        let dirt = map_layout()
            .into_iter()
            .flatten()
            .filter(|t| *t == TileType::Dirt)
            .count();
        assert_eq!(dirt, 0);
    }
}
