//! Static unit and building catalog
//!
//! Costs, combat stats, and per-turn production. Read-only process-wide
//! configuration; never mutated at runtime.

use crate::grid::Terrain;
use serde::{Deserialize, Serialize};

/// Movement-capability class of a unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Ground-only
    Troop,
    /// Amphibious: water or land
    Ship,
}

impl UnitKind {
    /// Whether a unit of this class may stand on the given terrain
    pub fn can_traverse(self, terrain: Terrain) -> bool {
        match self {
            UnitKind::Troop => terrain == Terrain::Land,
            UnitKind::Ship => matches!(terrain, Terrain::Land | Terrain::Water),
        }
    }

    /// Building that trains this unit class
    pub fn trained_at(self) -> BuildingKind {
        match self {
            UnitKind::Troop => BuildingKind::City,
            UnitKind::Ship => BuildingKind::Port,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingKind {
    City,
    Port,
    Fort,
}

impl std::fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BuildingKind::City => "city",
            BuildingKind::Port => "port",
            BuildingKind::Fort => "fort",
        };
        f.write_str(name)
    }
}

/// Combat stat block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitStats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

/// Cost and stats for one unit kind + tier
#[derive(Clone, Copy, Debug)]
pub struct UnitConfig {
    pub cost_gold: i32,
    pub cost_wood: i32,
    pub cost_iron: i32,
    pub cost_research: i32,
    pub stats: UnitStats,
}

impl UnitConfig {
    const fn new(gold: i32, wood: i32, iron: i32, research: i32, stats: UnitStats) -> Self {
        Self {
            cost_gold: gold,
            cost_wood: wood,
            cost_iron: iron,
            cost_research: research,
            stats,
        }
    }
}

/// Cost and per-turn production for one building kind
#[derive(Clone, Copy, Debug)]
pub struct BuildingConfig {
    pub cost_gold: i32,
    pub cost_wood: i32,
    pub cost_iron: i32,
    pub cost_research: i32,
    pub production_gold: i32,
    pub production_wood: i32,
    pub production_iron: i32,
}

impl BuildingConfig {
    const fn new(gold: i32, wood: i32, iron: i32, pg: i32, pw: i32, pi: i32) -> Self {
        Self {
            cost_gold: gold,
            cost_wood: wood,
            cost_iron: iron,
            cost_research: 0,
            production_gold: pg,
            production_wood: pw,
            production_iron: pi,
        }
    }
}

/// Tiers 1 and 2 per unit kind
static TROOP_TIERS: [UnitConfig; 2] = [
    UnitConfig::new(10, 0, 0, 0, UnitStats { health: 5, attack: 2, defense: 1 }),
    UnitConfig::new(20, 0, 5, 50, UnitStats { health: 8, attack: 4, defense: 2 }),
];

static SHIP_TIERS: [UnitConfig; 2] = [
    UnitConfig::new(0, 20, 0, 0, UnitStats { health: 10, attack: 3, defense: 2 }),
    UnitConfig::new(0, 40, 10, 50, UnitStats { health: 15, attack: 5, defense: 3 }),
];

static CITY: BuildingConfig = BuildingConfig::new(50, 0, 0, 10, 0, 0);
static PORT: BuildingConfig = BuildingConfig::new(30, 10, 0, 0, 5, 0);
static FORT: BuildingConfig = BuildingConfig::new(40, 0, 5, 0, 0, 3);

/// Look up a unit configuration by kind and tier (1 or 2)
pub fn unit_config(kind: UnitKind, tier: u8) -> Option<&'static UnitConfig> {
    let tiers = match kind {
        UnitKind::Troop => &TROOP_TIERS,
        UnitKind::Ship => &SHIP_TIERS,
    };
    match tier {
        1 => Some(&tiers[0]),
        2 => Some(&tiers[1]),
        _ => None,
    }
}

pub fn building_config(kind: BuildingKind) -> &'static BuildingConfig {
    match kind {
        BuildingKind::City => &CITY,
        BuildingKind::Port => &PORT,
        BuildingKind::Fort => &FORT,
    }
}

/// Research gained by the current player at every end of turn
pub const RESEARCH_PER_TURN: i32 = 5;

/// Starting endowment for a joining player (gold, wood, iron, research)
pub const START_RESOURCES: (i32, i32, i32, i32) = (100, 50, 20, 0);

/// Display colors assigned round-robin by player id
pub static PLAYER_COLORS: [&str; 8] = [
    "#ff0000", "#0000ff", "#00ff00", "#ffff00", "#ff00ff", "#00ffff", "#ffa500", "#800080",
];
