//! Server state management
//!
//! One shared `GameState` behind a coarse mutex, plus the broadcast channel
//! that fans out snapshots to connected viewers. Snapshots are serialized
//! while the game lock is held, so viewers never observe a torn state.

use hexisle_core::GameState;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::broadcast;

/// Buffered snapshots per viewer before it starts skipping frames
const VIEWER_BUFFER: usize = 32;

/// Server-wide shared state
pub struct ServerState {
    game: Mutex<Option<GameState>>,
    updates: broadcast::Sender<String>,
    pub map_cols: usize,
    pub map_rows: usize,
}

impl ServerState {
    pub fn new(map_cols: usize, map_rows: usize) -> Self {
        let (updates, _) = broadcast::channel(VIEWER_BUFFER);
        Self {
            game: Mutex::new(None),
            updates,
            map_cols,
            map_rows,
        }
    }

    /// Lock the game without initializing it
    pub fn game(&self) -> MutexGuard<'_, Option<GameState>> {
        self.game.lock().unwrap()
    }

    /// Run `f` against the game, creating it at the configured size first if
    /// no game exists yet
    pub fn with_game<T>(&self, f: impl FnOnce(&mut GameState) -> T) -> T {
        let mut guard = self.game.lock().unwrap();
        let game = guard.get_or_insert_with(|| {
            tracing::info!(cols = self.map_cols, rows = self.map_rows, "initializing game state");
            GameState::new(self.map_cols, self.map_rows)
        });
        f(game)
    }

    /// Subscribe a new viewer to state snapshots
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.updates.subscribe()
    }

    /// Push a snapshot to all connected viewers. Call with the game lock
    /// held by the mutating handler.
    pub fn broadcast_state(&self, game: &GameState) {
        if self.updates.receiver_count() == 0 {
            return;
        }
        match serde_json::to_string(game) {
            Ok(json) => {
                // Send only fails when every receiver is gone; that is fine
                let _ = self.updates.send(json);
            }
            Err(err) => tracing::error!(?err, "failed to encode state snapshot"),
        }
    }
}
