//! Movement reachability
//!
//! Breadth-first search over hex neighbors, bounded by a move budget. A tile
//! is traversable for a capability class when its terrain is allowed and no
//! unit or building occupies it.

use crate::catalog::UnitKind;
use crate::state::GameState;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Tiles reachable from (col, row) within `range` steps for the given unit
/// class. The origin itself is never included; an out-of-bounds origin yields
/// an empty result.
pub fn move_range(
    state: &GameState,
    col: usize,
    row: usize,
    range: u32,
    kind: UnitKind,
) -> Vec<[usize; 2]> {
    if !state.grid.in_bounds(col, row) {
        return Vec::new();
    }

    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut result = Vec::new();
    let mut queue = VecDeque::new();
    visited.insert((col, row));
    queue.push_back((col, row, 0u32));

    while let Some((c, r, dist)) = queue.pop_front() {
        if dist > 0 {
            result.push([c, r]);
        }
        if dist == range {
            continue;
        }
        for (nc, nr) in state.grid.neighbors(c, r) {
            if visited.contains(&(nc, nr)) {
                continue;
            }
            let traversable = state
                .terrain(nc, nr)
                .is_some_and(|t| kind.can_traverse(t))
                && !state.occupied(nc, nr);
            if traversable {
                visited.insert((nc, nr));
                queue.push_back((nc, nr, dist + 1));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Terrain};
    use crate::state::Unit;

    fn open_state(cols: usize, rows: usize) -> GameState {
        let mut grid = Grid::water(cols, rows);
        for c in 0..cols {
            for r in 0..rows {
                grid.set(c, r, Terrain::Land);
            }
        }
        GameState::with_grid(grid)
    }

    fn troop(col: usize, row: usize) -> Unit {
        Unit {
            col,
            row,
            moved: false,
            owner: 1,
            kind: UnitKind::Troop,
            tier: 1,
            health: 5,
            attack: 2,
            defense: 1,
        }
    }

    #[test]
    fn test_range_one_open_ground() {
        let state = open_state(9, 9);
        let tiles = move_range(&state, 4, 4, 1, UnitKind::Troop);
        // Exactly the six neighbors, origin excluded
        assert_eq!(tiles.len(), 6);
        assert!(!tiles.contains(&[4, 4]));
    }

    #[test]
    fn test_occupied_tiles_block() {
        let mut state = open_state(9, 9);
        state.units.push(troop(5, 4));
        let tiles = move_range(&state, 4, 4, 1, UnitKind::Troop);
        assert_eq!(tiles.len(), 5);
        assert!(!tiles.contains(&[5, 4]));
    }

    #[test]
    fn test_troop_cannot_cross_water() {
        let mut state = open_state(9, 9);
        // Wall of water splits the map at col 5
        for r in 0..9 {
            state.grid.set(5, r, Terrain::Water);
        }
        let tiles = move_range(&state, 4, 4, 8, UnitKind::Troop);
        assert!(tiles.iter().all(|t| t[0] < 5));
        let tiles = move_range(&state, 4, 4, 8, UnitKind::Ship);
        assert!(tiles.iter().any(|t| t[0] > 5));
    }

    #[test]
    fn test_range_cap() {
        let state = open_state(20, 20);
        let tiles = move_range(&state, 10, 10, 2, UnitKind::Troop);
        // Hex disc of radius 2 minus origin
        assert_eq!(tiles.len(), 18);
    }

    #[test]
    fn test_out_of_bounds_origin() {
        let state = open_state(5, 5);
        assert!(move_range(&state, 50, 50, 3, UnitKind::Troop).is_empty());
    }
}
