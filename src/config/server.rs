/// Server configuration constants.
///
/// Bind address of the HTTP/WebSocket server and location of the world service.
/// The world service can be overridden at runtime through environment variables.
use std::env;
use std::time::Duration;

use log::info;

pub const BIND_HOST: &str = "127.0.0.1";
pub const BIND_PORT: u16 = 8080;

/// World service queried at the start of every session.
pub const DEFAULT_WORLD_URL: &str = "http://127.0.0.1:8000/mundo-wumpus";

/// Maximum time (in seconds) to wait for the world service.
pub const WORLD_FETCH_TIMEOUT_SECS: u64 = 5;

/// Overrides `DEFAULT_WORLD_URL`.
pub const WORLD_URL_ENV: &str = "WUMPUS_WORLD_URL";

/// Set to `local` to generate worlds in-process instead of calling the world service.
pub const WORLD_SOURCE_ENV: &str = "WUMPUS_WORLD_SOURCE";

/// Where worlds come from for every new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldSourceConfig {
    Http { url: String, timeout: Duration },
    Local,
}

impl WorldSourceConfig {
    /// Read the world source from the environment, falling back to the default service URL.
    pub fn from_env() -> Self {
        if env::var(WORLD_SOURCE_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("local")) {
            info!("[Config] Using the built-in world generator");
            return WorldSourceConfig::Local;
        }
        let url = env::var(WORLD_URL_ENV).unwrap_or_else(|_| DEFAULT_WORLD_URL.to_string());
        info!("[Config] Fetching worlds from {}", url);
        WorldSourceConfig::Http {
            url,
            timeout: Duration::from_secs(WORLD_FETCH_TIMEOUT_SECS),
        }
    }
}
