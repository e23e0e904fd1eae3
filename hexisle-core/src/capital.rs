//! Capital placement for joining players
//!
//! Deterministic-by-id: candidates are unoccupied land tiles; the player id
//! selects a map quadrant (inset from the edges) and an index within it, so
//! successive players spread out spatially without randomness.

use crate::state::GameState;

/// Pick a capital tile for the given player id.
///
/// Fallback chain: quadrant candidates, then any edge-inset land tile, then
/// any land tile, then (0, 0) on an all-water map.
pub fn place_capital(state: &GameState, player_id: u32) -> [usize; 2] {
    let (cols, rows) = (state.grid.cols, state.grid.rows);
    let mut land: Vec<[usize; 2]> = Vec::new();
    for col in 0..cols {
        for row in 0..rows {
            if state.terrain(col, row) == Some(crate::grid::Terrain::Land)
                && !state.occupied(col, row)
            {
                land.push([col, row]);
            }
        }
    }
    if land.is_empty() {
        return [0, 0];
    }

    // Signed arithmetic: on lopsided maps the inset ranges can be empty or
    // inverted, which must fall through to the fallbacks rather than underflow
    let (cols, rows) = (cols as i64, rows as i64);
    let margin = cols / 8;
    let (col_range, row_range) = match player_id % 4 {
        1 => ((margin, cols / 2 - margin), (margin, rows / 2 - margin)),
        2 => ((cols / 2 + margin, cols - margin), (margin, rows / 2 - margin)),
        3 => ((margin, cols / 2 - margin), (rows / 2 + margin, rows - margin)),
        _ => ((cols / 2 + margin, cols - margin), (rows / 2 + margin, rows - margin)),
    };
    let preferred: Vec<[usize; 2]> = land
        .iter()
        .copied()
        .filter(|&[c, r]| {
            let (c, r) = (c as i64, r as i64);
            c > col_range.0 && c < col_range.1 && r > row_range.0 && r < row_range.1
        })
        .collect();
    if !preferred.is_empty() {
        // Prime stride spreads consecutive ids within one quadrant
        let index = (player_id as usize - 1) * 7 % preferred.len();
        return preferred[index];
    }

    // Fallback: any land tile away from the edges
    let safe: Vec<[usize; 2]> = land
        .iter()
        .copied()
        .filter(|&[c, r]| {
            let (c, r) = (c as i64, r as i64);
            c > margin && c < cols - margin && r > margin && r < rows - margin
        })
        .collect();
    if !safe.is_empty() {
        return safe[(player_id as usize - 1) % safe.len()];
    }

    land[(player_id as usize - 1) % land.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Terrain};

    fn all_land_state(cols: usize, rows: usize) -> GameState {
        let mut grid = Grid::water(cols, rows);
        for c in 0..cols {
            for r in 0..rows {
                grid.set(c, r, Terrain::Land);
            }
        }
        GameState::with_grid(grid)
    }

    #[test]
    fn test_quadrant_assignment() {
        let state = all_land_state(40, 40);
        let [c1, r1] = place_capital(&state, 1);
        let [c2, r2] = place_capital(&state, 2);
        let [c3, r3] = place_capital(&state, 3);
        let [c4, r4] = place_capital(&state, 4);
        // Player 1 top-left, 2 top-right, 3 bottom-left, 4 bottom-right
        assert!(c1 < 20 && r1 < 20);
        assert!(c2 > 20 && r2 < 20);
        assert!(c3 < 20 && r3 > 20);
        assert!(c4 > 20 && r4 > 20);
    }

    #[test]
    fn test_deterministic_per_id() {
        let state = all_land_state(40, 40);
        assert_eq!(place_capital(&state, 1), place_capital(&state, 1));
        // Ids four apart share a quadrant but not a tile
        assert_ne!(place_capital(&state, 1), place_capital(&state, 5));
    }

    #[test]
    fn test_wide_short_map_falls_back() {
        // cols >> rows makes the row inset ranges empty; placement must fall
        // through to the land fallbacks instead of underflowing
        let state = all_land_state(200, 40);
        for id in 1..=4 {
            let [c, r] = place_capital(&state, id);
            assert!(c < 200 && r < 40);
            assert_eq!(state.terrain(c, r), Some(Terrain::Land));
        }
    }

    #[test]
    fn test_all_water_fallback() {
        let state = GameState::with_grid(Grid::water(30, 30));
        assert_eq!(place_capital(&state, 1), [0, 0]);
    }

    #[test]
    fn test_single_land_tile() {
        let mut grid = Grid::water(30, 30);
        grid.set(2, 2, Terrain::Land);
        let state = GameState::with_grid(grid);
        assert_eq!(place_capital(&state, 3), [2, 2]);
    }
}
