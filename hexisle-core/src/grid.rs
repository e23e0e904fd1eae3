//! Hex grid geometry with offset (col, row) coordinates
//!
//! The grid is a flat-topped hex tiling stored as a dense `cols x rows`
//! array. Two of the six neighbors depend on column parity: even columns
//! reach up-left/up-right (row - 1), odd columns reach down-left/down-right
//! (row + 1).

use serde::{Deserialize, Serialize};

/// Terrain classification of a tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Land,
    Water,
    Void,
}

/// A single grid tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "type")]
    pub terrain: Terrain,
}

impl Tile {
    pub const fn new(terrain: Terrain) -> Self {
        Self { terrain }
    }
}

/// Dense tile grid, indexed `tiles[col][row]`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    pub cols: usize,
    pub rows: usize,
    pub tiles: Vec<Vec<Tile>>,
}

impl Grid {
    /// All-water grid of the given dimensions
    pub fn water(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![vec![Tile::new(Terrain::Water); rows]; cols],
        }
    }

    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows
    }

    pub fn terrain(&self, col: usize, row: usize) -> Option<Terrain> {
        self.tiles.get(col)?.get(row).map(|t| t.terrain)
    }

    pub fn set(&mut self, col: usize, row: usize, terrain: Terrain) {
        self.tiles[col][row] = Tile::new(terrain);
    }

    /// Number of land tiles
    pub fn land_tiles(&self) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|t| t.terrain == Terrain::Land)
            .count()
    }

    /// In-bounds hex neighbors of (col, row)
    pub fn neighbors(&self, col: usize, row: usize) -> Vec<(usize, usize)> {
        let (c, r) = (col as i64, row as i64);
        let mut candidates = vec![(c + 1, r), (c - 1, r), (c, r + 1), (c, r - 1)];
        if col % 2 == 0 {
            candidates.push((c + 1, r - 1));
            candidates.push((c - 1, r - 1));
        } else {
            candidates.push((c + 1, r + 1));
            candidates.push((c - 1, r + 1));
        }
        candidates
            .into_iter()
            .filter(|&(nc, nr)| {
                nc >= 0 && nr >= 0 && (nc as usize) < self.cols && (nr as usize) < self.rows
            })
            .map(|(nc, nr)| (nc as usize, nr as usize))
            .collect()
    }
}
