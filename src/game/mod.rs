//! Game logic root module.
//!
//! Pure rules over plain values: no actors, no I/O.

pub mod types;
pub mod grid;
pub mod resolver;
pub mod state;
pub mod render;
pub mod generator;
