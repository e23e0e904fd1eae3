//! Map generation endpoint

use crate::routes::valid_dimension;
use crate::state::ServerState;
use axum::extract::{Query, State};
use axum::Json;
use hexisle_core::{mapgen, Grid};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

#[derive(Deserialize)]
pub struct MapParams {
    pub cols: Option<i64>,
    pub rows: Option<i64>,
}

/// Generate a fresh grid. Does not read or mutate the game state.
pub async fn get_map(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<MapParams>,
) -> Json<Grid> {
    let start = Instant::now();
    let cols = valid_dimension(params.cols, state.map_cols);
    let rows = valid_dimension(params.rows, state.map_rows);
    let grid = mapgen::generate(cols, rows);
    tracing::info!(
        cols,
        rows,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated map"
    );
    Json(grid)
}
