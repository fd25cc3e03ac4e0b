// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the main backend server components, including:
//! - Application state management
//! - HTTP/WebSocket routing
//! - World fetching (remote world service or in-process generator)
//! - Game session orchestration (session lifecycle, tick loop)

pub mod state;
pub mod router;
pub mod world_fetcher;
pub mod game_session;
pub mod ws_error;
