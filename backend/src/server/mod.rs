//! Server construction and route wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::api::greeting::index;
use crate::api::health::{live, ready, HealthState};
use crate::api::recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe};
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::RecipeRepository;
use crate::middleware::Trace;

/// Assemble the application served by every worker.
///
/// Swagger UI is mounted at `/docs` in debug builds only.
pub fn build_app(
    repository: Arc<dyn RecipeRepository>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let mut app = App::new()
        .app_data(web::Data::from(repository))
        .app_data(health_state)
        .wrap(Trace)
        .service(index)
        .service(create_recipe)
        .service(list_recipes)
        .service(get_recipe)
        .service(update_recipe)
        .service(delete_recipe)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    {
        app = app
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app
}
