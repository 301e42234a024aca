//! Service entry-point: wires the recipe REST endpoints to MongoDB.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::api::health::HealthState;
use backend::domain::ports::RecipeRepository;
use backend::outbound::persistence::MongoRecipeRepository;
use backend::server::{build_app, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env();
    let repository =
        MongoRecipeRepository::connect(&config.mongodb_uri, config.database.as_deref())
            .await
            .map_err(std::io::Error::other)?;
    let repository: Arc<dyn RecipeRepository> = Arc::new(repository);
    info!(bind = %config.bind_addr, "recipe store connected");

    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe stays reachable.
    let server_health_state = health_state.clone();
    let server =
        HttpServer::new(move || build_app(repository.clone(), server_health_state.clone()))
            .bind(config.bind_addr)?;

    health_state.mark_ready();
    server.run().await
}
