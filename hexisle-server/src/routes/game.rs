//! Game API endpoints
//!
//! Decodes requests, dispatches to the core action strategies, and pushes a
//! snapshot to viewers after every successful mutation. Declined actions come
//! back as 400 with an `error` body; the game state is untouched.

use crate::routes::valid_dimension;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hexisle_core::{actions, reach, Action, GameState, UnitKind};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct GameParams {
    pub regen: Option<String>,
    pub cols: Option<i64>,
    pub rows: Option<i64>,
}

/// Current game state; `regen=1` regenerates it first
pub async fn get_game(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<GameParams>,
) -> Json<GameState> {
    if params.regen.as_deref() == Some("1") {
        let cols = valid_dimension(params.cols, state.map_cols);
        let rows = valid_dimension(params.rows, state.map_rows);
        tracing::info!(cols, rows, "regenerating game state");
        let mut guard = state.game();
        let game = guard.insert(GameState::new(cols, rows));
        state.broadcast_state(game);
        return Json(game.clone());
    }
    state.with_game(|game| Json(game.clone()))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub from_col: i64,
    #[serde(default)]
    pub from_row: i64,
    pub to_col: i64,
    pub to_row: i64,
}

/// Movement and combat actions
pub async fn post_move(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Response {
    apply_action(&state, &req, false)
}

/// Unit and building placement actions
pub async fn post_place(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRequest>,
) -> Response {
    apply_action(&state, &req, true)
}

fn apply_action(state: &ServerState, req: &MoveRequest, placement: bool) -> Response {
    let mut guard = state.game();
    let Some(game) = guard.as_mut() else {
        return error_response(StatusCode::BAD_REQUEST, "game not initialized");
    };

    let action = match Action::from_request(
        &req.action_type,
        (req.from_col, req.from_row),
        (req.to_col, req.to_row),
    ) {
        Ok(action) => action,
        Err(err) => return error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    };
    if action.is_placement() != placement {
        let msg = if placement { "invalid place type" } else { "invalid move type" };
        return error_response(StatusCode::BAD_REQUEST, msg);
    }

    match action.apply(game) {
        Ok(()) => {
            tracing::info!(action = %req.action_type, to_col = req.to_col, to_row = req.to_row, "action applied");
            state.broadcast_state(game);
            Json(game.clone()).into_response()
        }
        Err(err) => {
            tracing::warn!(action = %req.action_type, %err, "action declined");
            error_response(StatusCode::BAD_REQUEST, &err.to_string())
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRangeRequest {
    pub col: i64,
    pub row: i64,
    pub range: i64,
    pub unit_type: UnitKind,
}

/// Tiles reachable for a unit class within a move budget
pub async fn post_move_range(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<MoveRangeRequest>,
) -> Json<serde_json::Value> {
    let tiles = state.with_game(|game| {
        if req.col < 0 || req.row < 0 || req.range < 0 {
            return Vec::new();
        }
        reach::move_range(
            game,
            req.col as usize,
            req.row as usize,
            req.range as u32,
            req.unit_type,
        )
    });
    Json(json!({ "tiles": tiles }))
}

/// Advance the turn: reset moved flags, produce resources, cycle players
pub async fn post_end_turn(State(state): State<Arc<ServerState>>) -> Response {
    let mut guard = state.game();
    let Some(game) = guard.as_mut() else {
        return error_response(StatusCode::BAD_REQUEST, "game not initialized");
    };
    match Action::EndTurn.apply(game) {
        Ok(()) => {
            tracing::info!(turn = game.turn, current_player = game.current_player, "turn ended");
            state.broadcast_state(game);
            Json(game.clone()).into_response()
        }
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

#[derive(Deserialize)]
pub struct JoinRequest {
    #[serde(default)]
    pub name: String,
}

/// Join a new player; creates the game first if none exists
pub async fn post_join(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<JoinRequest>,
) -> Response {
    state.with_game(|game| {
        let id = actions::join(game, &req.name);
        let Some(player) = game.player(id).cloned() else {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "join failed");
        };
        tracing::info!(player = id, name = %player.name, capital = ?player.capital, "player joined");
        state.broadcast_state(game);
        Json(json!({
            "playerId": id,
            "color": player.color,
            "capital": player.capital,
            "gameState": game,
        }))
        .into_response()
    })
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
