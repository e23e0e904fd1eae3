//! Map command - generate a grid and print land statistics

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use hexisle_core::grid::Terrain;
use hexisle_core::mapgen;

#[derive(Args)]
pub struct MapArgs {
    /// Map columns
    #[arg(long, default_value = "50")]
    pub cols: usize,

    /// Map rows
    #[arg(long, default_value = "50")]
    pub rows: usize,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run map command
pub fn run(args: MapArgs) -> Result<()> {
    let (cols, rows) = effective_dimensions(&args);
    let grid = match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            mapgen::generate_with(cols, rows, &mut rng)
        }
        None => mapgen::generate(cols, rows),
    };

    let total = grid.cols * grid.rows;
    let land = grid.land_tiles();
    let water = grid
        .tiles
        .iter()
        .flatten()
        .filter(|t| t.terrain == Terrain::Water)
        .count();

    println!("Map {}x{}", grid.cols, grid.rows);
    println!("  land:  {} ({:.1}%)", land, 100.0 * land as f64 / total as f64);
    println!("  water: {} ({:.1}%)", water, 100.0 * water as f64 / total as f64);
    if land == 0 {
        println!("  note: generation fell back to an all-water map");
    }

    Ok(())
}

/// Same dimension validation as the serve command
fn effective_dimensions(args: &MapArgs) -> (usize, usize) {
    (
        crate::serve::validate_dimension("cols", args.cols, 50),
        crate::serve::validate_dimension("rows", args.rows, 50),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_validated_before_generation() {
        let args = MapArgs { cols: 0, rows: 0, seed: Some(1) };
        assert_eq!(effective_dimensions(&args), (50, 50));
        let args = MapArgs { cols: 64, rows: 60000, seed: None };
        assert_eq!(effective_dimensions(&args), (64, 50));
    }
}
