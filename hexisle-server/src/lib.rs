//! HEXISLE Server - HTTP API and live viewer channel
//!
//! This crate provides the web backend:
//! - REST API for map generation and game actions
//! - WebSocket channel pushing state snapshots to viewers
//! - Static file serving for the client

mod routes;
mod state;

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    /// Initial map size used when the game auto-creates
    pub map_cols: usize,
    pub map_rows: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            static_dir: "web/static".to_string(),
            map_cols: 50,
            map_rows: 50,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let static_service = ServeDir::new(&config.static_dir);

    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Map generation (does not touch game state)
        .route("/api/map", get(routes::map::get_map))
        // Game API
        .route("/api/game", get(routes::game::get_game))
        .route("/api/move", post(routes::game::post_move))
        .route("/api/place", post(routes::game::post_place))
        .route("/api/move-range", post(routes::game::post_move_range))
        .route("/api/endturn", post(routes::game::post_end_turn))
        .route("/api/join", post(routes::game::post_join))
        // Live viewer channel
        .route("/api/ws", get(routes::ws::ws_handler))
        // Shared state
        .with_state(state)
        // Static file serving (must be last)
        .fallback_service(static_service)
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new(config.map_cols, config.map_rows));
    let router = create_router(&config, state);

    tracing::info!("HEXISLE server starting on http://0.0.0.0:{}", config.port);
    tracing::info!(
        "Initial map size {}x{}, static files from: {}",
        config.map_cols,
        config.map_rows,
        config.static_dir
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
