// src/server/state.rs

//! Application state for the backend server.
//!
//! Holds the world source every new game session fetches its grid from.
//! Shared between HTTP/WebSocket handlers.

use crate::server::world_fetcher::SharedWorldSource;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Where each session gets its world (world service or in-process generator).
    pub world_source: SharedWorldSource,
}

impl AppState {
    /// Create a new AppState around the given world source.
    pub fn new(world_source: SharedWorldSource) -> Self {
        AppState { world_source }
    }
}
