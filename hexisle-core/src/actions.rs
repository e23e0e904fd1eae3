//! Action validation and application
//!
//! Each action kind is one arm of the [`Action`] tagged union, parsed from
//! the wire `type` string. Every arm validates all of its preconditions
//! before touching the state, so a declined action leaves the game unchanged.

use crate::capital::place_capital;
use crate::catalog::{
    building_config, unit_config, BuildingKind, UnitKind, PLAYER_COLORS, RESEARCH_PER_TURN,
    START_RESOURCES,
};
use crate::grid::Terrain;
use crate::state::{Building, GameState, Unit};
use thiserror::Error;

/// Why an action was declined. None of these are fatal; the state is
/// unchanged when they occur.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown action type: {0}")]
    UnknownAction(String),
    #[error("no such unit tier: {0}")]
    InvalidTier(u8),
    #[error("coordinates out of bounds")]
    OutOfBounds,
    #[error("no unit at the source tile")]
    UnitNotFound,
    #[error("unit does not belong to the current player")]
    NotYourTurn,
    #[error("unit has already moved this turn")]
    AlreadyMoved,
    #[error("terrain is not traversable for this unit")]
    IllegalTerrain,
    #[error("tile is occupied")]
    Occupied,
    #[error("requires a friendly {0} at the target tile")]
    MissingBuilding(BuildingKind),
    #[error("ports must be placed adjacent to water")]
    NeedsCoast,
    #[error("insufficient resources")]
    InsufficientResources,
    #[error("nothing to attack at the target tile")]
    NoTarget,
    #[error("current player has not joined the game")]
    NoSuchPlayer,
}

/// A validated-and-applied game action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move { from: (i64, i64), to: (i64, i64) },
    PlaceUnit { kind: UnitKind, tier: u8, to: (i64, i64) },
    PlaceBuilding { kind: BuildingKind, to: (i64, i64) },
    Attack { from: (i64, i64), to: (i64, i64) },
    EndTurn,
}

impl Action {
    /// Map a wire action-type string to its strategy
    pub fn from_request(
        action_type: &str,
        from: (i64, i64),
        to: (i64, i64),
    ) -> Result<Self, ActionError> {
        let action = match action_type {
            "move" => Action::Move { from, to },
            "attack" => Action::Attack { from, to },
            "place_troop" => Action::PlaceUnit { kind: UnitKind::Troop, tier: 1, to },
            "place_ship" => Action::PlaceUnit { kind: UnitKind::Ship, tier: 1, to },
            "place_advanced_troop" => Action::PlaceUnit { kind: UnitKind::Troop, tier: 2, to },
            "place_advanced_ship" => Action::PlaceUnit { kind: UnitKind::Ship, tier: 2, to },
            "place_city" => Action::PlaceBuilding { kind: BuildingKind::City, to },
            "place_port" => Action::PlaceBuilding { kind: BuildingKind::Port, to },
            "place_fort" => Action::PlaceBuilding { kind: BuildingKind::Fort, to },
            other => return Err(ActionError::UnknownAction(other.to_string())),
        };
        Ok(action)
    }

    /// Whether this is a placement action (dispatched via the place endpoint)
    pub fn is_placement(&self) -> bool {
        matches!(self, Action::PlaceUnit { .. } | Action::PlaceBuilding { .. })
    }

    /// Validate and apply this action against the state
    pub fn apply(&self, state: &mut GameState) -> Result<(), ActionError> {
        match *self {
            Action::Move { from, to } => move_unit(state, from, to),
            Action::PlaceUnit { kind, tier, to } => place_unit(state, kind, tier, to),
            Action::PlaceBuilding { kind, to } => place_building(state, kind, to),
            Action::Attack { from, to } => attack(state, from, to),
            Action::EndTurn => end_turn(state),
        }
    }
}

/// Reject negative or out-of-grid coordinates before any strategy runs
fn checked(state: &GameState, (col, row): (i64, i64)) -> Result<(usize, usize), ActionError> {
    if col < 0 || row < 0 {
        return Err(ActionError::OutOfBounds);
    }
    let (col, row) = (col as usize, row as usize);
    if !state.grid.in_bounds(col, row) {
        return Err(ActionError::OutOfBounds);
    }
    Ok((col, row))
}

fn move_unit(state: &mut GameState, from: (i64, i64), to: (i64, i64)) -> Result<(), ActionError> {
    let (fc, fr) = checked(state, from)?;
    let (tc, tr) = checked(state, to)?;

    let idx = state
        .units
        .iter()
        .position(|u| u.col == fc && u.row == fr)
        .ok_or(ActionError::UnitNotFound)?;
    let unit = state.units[idx];
    if unit.owner != state.current_player {
        return Err(ActionError::NotYourTurn);
    }
    if unit.moved {
        return Err(ActionError::AlreadyMoved);
    }
    let terrain = state.terrain(tc, tr).ok_or(ActionError::OutOfBounds)?;
    if !unit.kind.can_traverse(terrain) {
        return Err(ActionError::IllegalTerrain);
    }
    if state.occupied(tc, tr) {
        return Err(ActionError::Occupied);
    }

    let unit = &mut state.units[idx];
    unit.col = tc;
    unit.row = tr;
    unit.moved = true;
    Ok(())
}

fn place_unit(
    state: &mut GameState,
    kind: UnitKind,
    tier: u8,
    to: (i64, i64),
) -> Result<(), ActionError> {
    let (tc, tr) = checked(state, to)?;
    let required = kind.trained_at();
    let has_building = state
        .buildings
        .iter()
        .any(|b| b.col == tc && b.row == tr && b.kind == required && b.owner == state.current_player);
    if !has_building {
        return Err(ActionError::MissingBuilding(required));
    }
    if state.unit_at(tc, tr).is_some() {
        return Err(ActionError::Occupied);
    }
    let config = unit_config(kind, tier).ok_or(ActionError::InvalidTier(tier))?;

    let current = state.current_player;
    let player = state.player_mut(current).ok_or(ActionError::NoSuchPlayer)?;
    if !player.can_afford(config.cost_gold, config.cost_wood, config.cost_iron, config.cost_research)
    {
        return Err(ActionError::InsufficientResources);
    }
    player.spend(config.cost_gold, config.cost_wood, config.cost_iron, config.cost_research);

    state.units.push(Unit {
        col: tc,
        row: tr,
        moved: false,
        owner: current,
        kind,
        tier,
        health: config.stats.health,
        attack: config.stats.attack,
        defense: config.stats.defense,
    });
    Ok(())
}

fn place_building(
    state: &mut GameState,
    kind: BuildingKind,
    to: (i64, i64),
) -> Result<(), ActionError> {
    let (tc, tr) = checked(state, to)?;
    if state.terrain(tc, tr) != Some(Terrain::Land) {
        return Err(ActionError::IllegalTerrain);
    }
    if state.occupied(tc, tr) {
        return Err(ActionError::Occupied);
    }
    if kind == BuildingKind::Port {
        let coastal = state
            .grid
            .neighbors(tc, tr)
            .into_iter()
            .any(|(nc, nr)| state.terrain(nc, nr) == Some(Terrain::Water));
        if !coastal {
            return Err(ActionError::NeedsCoast);
        }
    }
    let config = building_config(kind);

    let current = state.current_player;
    let player = state.player_mut(current).ok_or(ActionError::NoSuchPlayer)?;
    if !player.can_afford(config.cost_gold, config.cost_wood, config.cost_iron, config.cost_research)
    {
        return Err(ActionError::InsufficientResources);
    }
    player.spend(config.cost_gold, config.cost_wood, config.cost_iron, config.cost_research);

    state.buildings.push(Building {
        col: tc,
        row: tr,
        owner: current,
        level: 1,
        kind,
    });
    Ok(())
}

fn attack(state: &mut GameState, from: (i64, i64), to: (i64, i64)) -> Result<(), ActionError> {
    let (fc, fr) = checked(state, from)?;
    let (tc, tr) = checked(state, to)?;

    let attacker_idx = state
        .units
        .iter()
        .position(|u| u.col == fc && u.row == fr && u.owner == state.current_player)
        .ok_or(ActionError::UnitNotFound)?;

    // Enemy unit first: combat is simultaneous, both sides take damage
    if let Some(defender_idx) = state
        .units
        .iter()
        .position(|u| u.col == tc && u.row == tr && u.owner != state.current_player)
    {
        let attacker = state.units[attacker_idx];
        let defender = state.units[defender_idx];
        state.units[defender_idx].health -= (attacker.attack - defender.defense).max(1);
        state.units[attacker_idx].health -= (defender.attack - attacker.defense).max(1);

        // Remove the dead, highest index first so the other index stays valid
        let mut dead: Vec<usize> = [attacker_idx, defender_idx]
            .into_iter()
            .filter(|&i| state.units[i].health <= 0)
            .collect();
        dead.sort_unstable_by(|a, b| b.cmp(a));
        for i in dead {
            state.units.remove(i);
        }
        return Ok(());
    }

    // Otherwise an enemy building: attack value chips away levels
    if let Some(building_idx) = state
        .buildings
        .iter()
        .position(|b| b.col == tc && b.row == tr && b.owner != state.current_player)
    {
        let damage = state.units[attacker_idx].attack;
        state.buildings[building_idx].level -= damage;
        if state.buildings[building_idx].level <= 0 {
            state.buildings.remove(building_idx);
        }
        return Ok(());
    }

    Err(ActionError::NoTarget)
}

fn end_turn(state: &mut GameState) -> Result<(), ActionError> {
    for unit in &mut state.units {
        unit.moved = false;
    }

    let current = state.current_player;
    let (mut gold, mut wood, mut iron) = (0, 0, 0);
    for building in state.buildings.iter().filter(|b| b.owner == current) {
        let config = building_config(building.kind);
        gold += config.production_gold;
        wood += config.production_wood;
        iron += config.production_iron;
    }
    if let Some(player) = state.player_mut(current) {
        player.gold += gold;
        player.wood += wood;
        player.iron += iron;
        player.research += RESEARCH_PER_TURN;
    }

    state.turn += 1;
    if !state.players.is_empty() {
        state.current_player += 1;
        if state.current_player > state.players.len() as u32 {
            state.current_player = 1;
        }
    }
    Ok(())
}

/// Join a new player: smallest unused id, id-derived color, quadrant capital,
/// starting endowment, and an initial city plus basic troop at the capital.
/// Returns the new player id.
pub fn join(state: &mut GameState, name: &str) -> u32 {
    let mut id = 1u32;
    while state.players.iter().any(|p| p.id == id) {
        id += 1;
    }
    let color = PLAYER_COLORS[(id as usize - 1) % PLAYER_COLORS.len()].to_string();
    let capital = place_capital(state, id);
    let (gold, wood, iron, research) = START_RESOURCES;

    state.players.push(crate::state::Player {
        id,
        name: name.to_string(),
        color,
        capital,
        gold,
        wood,
        iron,
        research,
    });
    if state.players.len() == 1 {
        state.current_player = id;
    }

    let [col, row] = capital;
    state.buildings.push(Building {
        col,
        row,
        owner: id,
        level: 1,
        kind: BuildingKind::City,
    });
    let stats = unit_config(UnitKind::Troop, 1)
        .map(|c| c.stats)
        .unwrap_or(crate::catalog::UnitStats { health: 5, attack: 2, defense: 1 });
    state.units.push(Unit {
        col,
        row,
        moved: false,
        owner: id,
        kind: UnitKind::Troop,
        tier: 1,
        health: stats.health,
        attack: stats.attack,
        defense: stats.defense,
    });
    id
}
