//! Recipes backend library modules.

pub mod api;
pub mod doc;
pub mod domain;
pub mod middleware;
pub mod models;
pub mod outbound;
pub mod server;

/// Request tracing middleware re-exported for server assembly.
pub use middleware::Trace;
