//! Authoritative game state
//!
//! One `GameState` holds the grid plus all units, buildings and players.
//! Mutation happens only through the action strategies in [`crate::actions`].
//! Serialized field names match the wire protocol (camelCase, tile/unit
//! `type` tags).

use crate::catalog::{UnitKind, BuildingKind};
use crate::grid::{Grid, Terrain};
use crate::mapgen;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Unit {
    pub col: usize,
    pub row: usize,
    pub moved: bool,
    pub owner: u32,
    #[serde(rename = "type")]
    pub kind: UnitKind,
    pub tier: u8,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Building {
    pub col: usize,
    pub row: usize,
    pub owner: u32,
    pub level: i32,
    #[serde(rename = "type")]
    pub kind: BuildingKind,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub capital: [usize; 2],
    pub gold: i32,
    pub wood: i32,
    pub iron: i32,
    pub research: i32,
}

impl Player {
    pub fn can_afford(&self, gold: i32, wood: i32, iron: i32, research: i32) -> bool {
        self.gold >= gold && self.wood >= wood && self.iron >= iron && self.research >= research
    }

    /// Deduct a cost; caller must have checked `can_afford`
    pub fn spend(&mut self, gold: i32, wood: i32, iron: i32, research: i32) {
        self.gold -= gold;
        self.wood -= wood;
        self.iron -= iron;
        self.research -= research;
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(flatten)]
    pub grid: Grid,
    pub units: Vec<Unit>,
    pub buildings: Vec<Building>,
    pub players: Vec<Player>,
    pub turn: u32,
    pub current_player: u32,
}

impl GameState {
    /// Fresh game on a freshly generated map
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_grid(mapgen::generate(cols, rows))
    }

    /// Fresh game on a caller-supplied grid
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            units: Vec::new(),
            buildings: Vec::new(),
            players: Vec::new(),
            turn: 1,
            current_player: 1,
        }
    }

    pub fn terrain(&self, col: usize, row: usize) -> Option<Terrain> {
        self.grid.terrain(col, row)
    }

    pub fn unit_at(&self, col: usize, row: usize) -> Option<&Unit> {
        self.units.iter().find(|u| u.col == col && u.row == row)
    }

    pub fn building_at(&self, col: usize, row: usize) -> Option<&Building> {
        self.buildings.iter().find(|b| b.col == col && b.row == row)
    }

    /// Whether any unit or building stands on the tile
    pub fn occupied(&self, col: usize, row: usize) -> bool {
        self.unit_at(col, row).is_some() || self.building_at(col, row).is_some()
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UnitKind;

    fn land_grid(cols: usize, rows: usize) -> Grid {
        let mut grid = Grid::water(cols, rows);
        for c in 0..cols {
            for r in 0..rows {
                grid.set(c, r, Terrain::Land);
            }
        }
        grid
    }

    #[test]
    fn test_occupancy_lookup() {
        let mut state = GameState::with_grid(land_grid(8, 8));
        assert!(!state.occupied(3, 3));
        state.units.push(Unit {
            col: 3,
            row: 3,
            moved: false,
            owner: 1,
            kind: UnitKind::Troop,
            tier: 1,
            health: 5,
            attack: 2,
            defense: 1,
        });
        assert!(state.occupied(3, 3));
        assert!(state.unit_at(3, 3).is_some());
        assert!(state.building_at(3, 3).is_none());
    }

    #[test]
    fn test_wire_format() {
        let state = GameState::with_grid(land_grid(2, 2));
        let json = serde_json::to_value(&state).unwrap();
        // Grid is flattened into the state object
        assert_eq!(json["cols"], 2);
        assert_eq!(json["rows"], 2);
        assert_eq!(json["tiles"][0][0]["type"], "land");
        assert_eq!(json["turn"], 1);
        assert_eq!(json["currentPlayer"], 1);
    }

    #[test]
    fn test_affordability() {
        let mut p = Player {
            id: 1,
            name: "a".into(),
            color: "#ff0000".into(),
            capital: [0, 0],
            gold: 30,
            wood: 10,
            iron: 0,
            research: 0,
        };
        assert!(p.can_afford(30, 10, 0, 0));
        assert!(!p.can_afford(31, 0, 0, 0));
        assert!(!p.can_afford(0, 0, 1, 0));
        p.spend(30, 10, 0, 0);
        assert_eq!((p.gold, p.wood), (0, 0));
    }
}
