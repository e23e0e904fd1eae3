//! HEXISLE Core - Turn-based strategy engine on a hex grid
//!
//! This crate provides the game logic for HEXISLE:
//! - Grid geometry (offset hex coordinates, flat-topped tiling)
//! - Procedural map generation (connected landmass, retry with fallback)
//! - Unit/building catalog with costs, stats and production
//! - Game state, action validation and application
//! - Movement reachability by capability class
//! - Capital placement for joining players

pub mod actions;
pub mod capital;
pub mod catalog;
pub mod grid;
pub mod mapgen;
pub mod reach;
pub mod state;

// Re-exports for convenient access
pub use actions::{Action, ActionError};
pub use catalog::{building_config, unit_config, BuildingKind, UnitKind};
pub use grid::{Grid, Terrain, Tile};
pub use state::{Building, GameState, Player, Unit};
