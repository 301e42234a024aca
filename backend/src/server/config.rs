//! HTTP server configuration sourced from the environment.

use std::env;
use std::net::SocketAddr;

use tracing::warn;

const DEFAULT_MONGODB_URI: &str = "mongodb://127.0.0.1:27017/recipes-dev";

/// Runtime configuration for the HTTP server and its storage backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// Explicit database name overriding the one in the URI, if set.
    pub database: Option<String>,
}

impl ServerConfig {
    /// Read configuration from `HTTP_BIND`, `MONGODB_URI` and
    /// `MONGODB_DATABASE`, falling back to a local MongoDB on port 3000.
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = var("HTTP_BIND")
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(error) => {
                    warn!(%error, value = %raw, "ignoring unparsable HTTP_BIND");
                    None
                }
            })
            .unwrap_or_else(default_bind);
        let mongodb_uri = var("MONGODB_URI").unwrap_or_else(|| DEFAULT_MONGODB_URI.to_owned());
        let database = var("MONGODB_DATABASE");

        Self {
            bind_addr,
            mongodb_uri,
            database,
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}
