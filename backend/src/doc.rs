//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] aggregates the HTTP surface: the recipe CRUD endpoints,
//! the greeting route, and the health probes. The generated document is
//! served by Swagger UI in debug builds.

use crate::models::{Error, ErrorCode, Level, NewRecipe, Recipe};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipes backend API",
        description = "CRUD interface over the recipe collection, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::greeting::index,
        crate::api::recipes::create_recipe,
        crate::api::recipes::list_recipes,
        crate::api::recipes::get_recipe,
        crate::api::recipes::update_recipe,
        crate::api::recipes::delete_recipe,
        crate::api::health::ready,
        crate::api::health::live,
    ),
    components(schemas(Recipe, NewRecipe, Level, Error, ErrorCode)),
    tags(
        (name = "recipes", description = "Operations on the recipe collection"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "meta", description = "Service landing page")
    )
)]
pub struct ApiDoc;
