//! HTTP and WebSocket routing configuration.
//!
//! Defines the game WebSocket endpoint and the built-in world service.

use actix_web::{web, HttpResponse, http::StatusCode};
use log::debug;

use crate::game::generator::generate_world;
use crate::server::game_session::session::ws_game;
use crate::server::ws_error::http_error_response;

/// Generate a fresh world in the world service wire format.
pub async fn world() -> HttpResponse {
    let grid = generate_world(&mut rand::rng());
    debug!("[Router] Served a generated world");
    HttpResponse::Ok().json(grid)
}

pub async fn not_found() -> HttpResponse {
    http_error_response("NOT_FOUND", "Unknown route", None, StatusCode::NOT_FOUND)
}

/// Configure the application's HTTP/WebSocket routes.
///
/// The game socket is handled by its own actor, which owns the client's game session.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_game)
    )
    .service(
        web::resource("/mundo-wumpus")
            .route(web::get().to(world))
    )
    .default_service(web::to(not_found));
}
