//! Main entry point for the backend server.
//!
//! Initializes logging, picks the world source, and launches the HTTP server
//! with the game WebSocket endpoint and the built-in world service.

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use config::server::{WorldSourceConfig, BIND_HOST, BIND_PORT};
use server::world_fetcher;

pub mod config;
mod server;
mod game;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let world_source = world_fetcher::from_config(&WorldSourceConfig::from_env());

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(world_source));

    info!("[Main] Listening on {}:{}", BIND_HOST, BIND_PORT);

    // Start the HTTP server with the game WebSocket endpoint.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((BIND_HOST, BIND_PORT))?
    .run()
    .await
}
