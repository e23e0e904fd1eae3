//! Procedural map generation
//!
//! Produces a single connected landmass: random walk from the grid center,
//! one edge-noise pass, then a flood fill that reverts any land outside the
//! central component back to water. Candidates below the minimum land ratio
//! are retried; after the attempt ceiling an all-water grid is returned so
//! callers always get a valid grid.

use crate::grid::{Grid, Terrain};
use rand::Rng;

/// Minimum fraction of the grid that must be land for a candidate to pass
const MIN_LAND_RATIO: f64 = 0.20;

/// Candidate attempts before falling back to an all-water grid
const MAX_ATTEMPTS: usize = 30;

/// The random walk visits up to this fraction of all tiles
const WALK_FRACTION: f64 = 0.6;

/// Probability that a land tile's water neighbor becomes land in the noise pass
const EDGE_NOISE: f64 = 0.25;

/// Generate a map using the thread-local RNG
pub fn generate(cols: usize, rows: usize) -> Grid {
    generate_with(cols, rows, &mut rand::thread_rng())
}

/// Generate a map from an explicit randomness source
pub fn generate_with<R: Rng>(cols: usize, rows: usize, rng: &mut R) -> Grid {
    if cols == 0 || rows == 0 {
        return Grid::water(cols, rows);
    }
    for _ in 0..MAX_ATTEMPTS {
        let (grid, land) = candidate(cols, rows, rng);
        if land as f64 / (cols * rows) as f64 >= MIN_LAND_RATIO {
            return grid;
        }
    }
    // Degenerate sizes can make the land-ratio target unreachable
    Grid::water(cols, rows)
}

/// One generation attempt; returns the grid and its land-tile count
fn candidate<R: Rng>(cols: usize, rows: usize, rng: &mut R) -> (Grid, usize) {
    let mut grid = Grid::water(cols, rows);
    let (center_col, center_row) = (cols / 2, rows / 2);

    // Step 1: seed a central landmass with a bounded random walk
    let mut land = 1usize;
    let steps = ((cols * rows) as f64 * WALK_FRACTION) as usize;
    let (mut col, mut row) = (center_col as i64, center_row as i64);
    grid.set(center_col, center_row, Terrain::Land);
    for _ in 0..steps {
        let (dc, dr) = walk_direction(col, rng);
        let (nc, nr) = (col + dc, row + dr);
        if nc >= 0 && nr >= 0 && (nc as usize) < cols && (nr as usize) < rows {
            col = nc;
            row = nr;
            if grid.terrain(col as usize, row as usize) != Some(Terrain::Land) {
                grid.set(col as usize, row as usize, Terrain::Land);
                land += 1;
            }
        }
    }

    // Step 2: edge noise for a natural coastline
    for c in 0..cols {
        for r in 0..rows {
            if grid.terrain(c, r) != Some(Terrain::Land) {
                continue;
            }
            for (nc, nr) in grid.neighbors(c, r) {
                if grid.terrain(nc, nr) == Some(Terrain::Water) && rng.gen_bool(EDGE_NOISE) {
                    grid.set(nc, nr, Terrain::Land);
                    land += 1;
                }
            }
        }
    }

    // Step 3: flood fill from center, then drop disconnected islands
    let visited = flood_fill(&grid, center_col, center_row);
    for c in 0..cols {
        for r in 0..rows {
            if grid.terrain(c, r) == Some(Terrain::Land) && !visited[c][r] {
                grid.set(c, r, Terrain::Water);
                land -= 1;
            }
        }
    }

    (grid, land)
}

/// One of the six flat-topped hex directions; the diagonal pair depends on
/// column parity
fn walk_direction<R: Rng>(col: i64, rng: &mut R) -> (i64, i64) {
    match rng.gen_range(0..6) {
        0 => (1, 0),
        1 => (-1, 0),
        2 => (0, 1),
        3 => (0, -1),
        4 => (1, (col % 2) * 2 - 1),
        _ => (-1, (col % 2) * 2 - 1),
    }
}

/// BFS over land tiles from the given start; returns the visited mask
pub(crate) fn flood_fill(grid: &Grid, start_col: usize, start_row: usize) -> Vec<Vec<bool>> {
    let mut visited = vec![vec![false; grid.rows]; grid.cols];
    let mut queue = std::collections::VecDeque::new();
    visited[start_col][start_row] = true;
    queue.push_back((start_col, start_row));
    while let Some((c, r)) = queue.pop_front() {
        for (nc, nr) in grid.neighbors(c, r) {
            if !visited[nc][nr] && grid.terrain(nc, nr) == Some(Terrain::Land) {
                visited[nc][nr] = true;
                queue.push_back((nc, nr));
            }
        }
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Land must form a single connected component, or the grid is the
    /// all-water fallback
    fn assert_valid_map(grid: &Grid) {
        let land = grid.land_tiles();
        if land == 0 {
            return; // fallback grid
        }
        let ratio = land as f64 / (grid.cols * grid.rows) as f64;
        assert!(ratio >= MIN_LAND_RATIO, "land ratio {ratio} below minimum");

        // Flood fill from any land tile must reach every land tile
        let mut start = None;
        'outer: for c in 0..grid.cols {
            for r in 0..grid.rows {
                if grid.terrain(c, r) == Some(Terrain::Land) {
                    start = Some((c, r));
                    break 'outer;
                }
            }
        }
        let (sc, sr) = start.unwrap();
        let visited = flood_fill(grid, sc, sr);
        let connected = visited.iter().flatten().filter(|&&v| v).count();
        assert_eq!(connected, land, "landmass is not connected");
    }

    #[test]
    fn test_generated_maps_are_connected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..5 {
            let grid = generate_with(40, 40, &mut rng);
            assert_eq!(grid.cols, 40);
            assert_eq!(grid.rows, 40);
            assert_valid_map(&grid);
        }
    }

    #[test]
    fn test_rectangular_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let grid = generate_with(60, 30, &mut rng);
        assert_eq!(grid.tiles.len(), 60);
        assert_eq!(grid.tiles[0].len(), 30);
        assert_valid_map(&grid);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // Zero-sized grids have no center tile to seed; return empty water
        let grid = generate_with(0, 0, &mut rng);
        assert_eq!(grid.land_tiles(), 0);
        let grid = generate_with(5, 0, &mut rng);
        assert_eq!((grid.cols, grid.rows), (5, 0));
        assert_eq!(grid.land_tiles(), 0);
    }

    #[test]
    fn test_no_void_tiles() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let grid = generate_with(30, 30, &mut rng);
        for col in &grid.tiles {
            for tile in col {
                assert_ne!(tile.terrain, Terrain::Void);
            }
        }
    }
}
