//! World sources.
//!
//! A session asks its `WorldSource` for a fresh grid once per start. The
//! production source calls the world service over HTTP; the local source
//! generates worlds in-process (or hands out a fixed grid in tests).

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::server::WorldSourceConfig;
use crate::game::generator::generate_world;
use crate::game::types::Grid;

#[derive(Debug, Error)]
pub enum WorldFetchError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("world service answered {status}")]
    Status { status: u16 },
    #[error("invalid world payload: {0}")]
    Payload(String),
}

/// Outstanding fetch. Runs on the session's arbiter, so it need not be `Send`.
pub type WorldFuture = Pin<Box<dyn Future<Output = Result<Grid, WorldFetchError>>>>;

pub trait WorldSource: Send + Sync {
    fn fetch(&self) -> WorldFuture;
}

/// Shared handle stored in the application state.
pub type SharedWorldSource = Arc<dyn WorldSource>;

pub fn from_config(config: &WorldSourceConfig) -> SharedWorldSource {
    match config {
        WorldSourceConfig::Http { url, timeout } => Arc::new(HttpWorldSource::new(url.clone(), *timeout)),
        WorldSourceConfig::Local => Arc::new(LocalWorldSource::random()),
    }
}

/// Fetches worlds from the world service with a parameterless GET.
pub struct HttpWorldSource {
    url: String,
    timeout: Duration,
}

impl HttpWorldSource {
    pub fn new(url: String, timeout: Duration) -> Self {
        Self { url, timeout }
    }
}

impl WorldSource for HttpWorldSource {
    fn fetch(&self) -> WorldFuture {
        let url = self.url.clone();
        let timeout = self.timeout;
        Box::pin(async move {
            debug!("[WorldFetcher] GET {}", url);
            // awc clients are bound to the current arbiter, so build one per request.
            let client = awc::Client::builder().timeout(timeout).finish();
            let mut response = client
                .get(url.as_str())
                .send()
                .await
                .map_err(|e| WorldFetchError::Request { url: url.clone(), reason: e.to_string() })?;

            if !response.status().is_success() {
                return Err(WorldFetchError::Status { status: response.status().as_u16() });
            }

            response
                .json::<Grid>()
                .await
                .map_err(|e| WorldFetchError::Payload(e.to_string()))
        })
    }
}

enum LocalMode {
    Random(Mutex<StdRng>),
    Fixed(Grid),
}

/// In-process world source backed by the generator.
pub struct LocalWorldSource {
    mode: LocalMode,
}

impl LocalWorldSource {
    pub fn random() -> Self {
        Self::seeded(StdRng::from_rng(&mut rand::rng()))
    }

    pub fn seeded(rng: StdRng) -> Self {
        Self { mode: LocalMode::Random(Mutex::new(rng)) }
    }

    /// Always returns `grid`.
    pub fn fixed(grid: Grid) -> Self {
        Self { mode: LocalMode::Fixed(grid) }
    }

    /// Produce a world synchronously.
    pub fn next_world(&self) -> Grid {
        match &self.mode {
            LocalMode::Fixed(grid) => *grid,
            LocalMode::Random(rng) => {
                let mut rng = rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                generate_world(&mut *rng)
            }
        }
    }
}

impl WorldSource for LocalWorldSource {
    fn fetch(&self) -> WorldFuture {
        let grid = self.next_world();
        Box::pin(async move { Ok(grid) })
    }
}
