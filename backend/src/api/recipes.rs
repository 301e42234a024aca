//! Recipe API handlers.
//!
//! ```text
//! POST   /recipes
//! GET    /recipes
//! GET    /recipes/{id}
//! PUT    /recipes/{id}
//! DELETE /recipes/{id}
//! ```
//!
//! Handlers are direct pass-throughs to the repository port: no
//! validation beyond payload deserialisation, no pagination, no caching.
//! Every storage failure maps uniformly to a 500 envelope carrying the
//! driver message.

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::models::{ApiResult, Error, NewRecipe, Recipe};
use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::error;

fn map_persistence_error(err: RecipePersistenceError) -> Error {
    error!(error = %err, "recipe storage operation failed");
    Error::internal(err.to_string())
}

/// Create one recipe from the request body.
#[utoipa::path(
    post,
    path = "/recipes",
    request_body = NewRecipe,
    responses(
        (status = 201, description = "Stored recipe", body = Recipe),
        (status = 400, description = "Malformed payload"),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipes")]
pub async fn create_recipe(
    repository: web::Data<dyn RecipeRepository>,
    payload: web::Json<NewRecipe>,
) -> ApiResult<HttpResponse> {
    let recipe = repository
        .create(payload.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::Created().json(recipe))
}

/// List every recipe in the collection.
#[utoipa::path(
    get,
    path = "/recipes",
    responses(
        (status = 200, description = "All recipes", body = [Recipe]),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipes")]
pub async fn list_recipes(
    repository: web::Data<dyn RecipeRepository>,
) -> ApiResult<web::Json<Vec<Recipe>>> {
    let recipes = repository.list().await.map_err(map_persistence_error)?;
    Ok(web::Json(recipes))
}

/// Fetch one recipe by identifier.
///
/// A well-formed identifier with no matching document yields 200 with a
/// JSON `null` body rather than 404.
#[utoipa::path(
    get,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "The recipe, or null when absent", body = Recipe),
        (status = 500, description = "Storage failure or malformed identifier", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/recipes/{id}")]
pub async fn get_recipe(
    repository: web::Data<dyn RecipeRepository>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Option<Recipe>>> {
    let recipe = repository
        .find_by_id(&path.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(recipe))
}

/// Replace one recipe wholesale and return the stored result.
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    request_body = NewRecipe,
    responses(
        (status = 200, description = "Updated recipe, or null when absent", body = Recipe),
        (status = 400, description = "Malformed payload"),
        (status = 500, description = "Storage failure or malformed identifier", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipes/{id}")]
pub async fn update_recipe(
    repository: web::Data<dyn RecipeRepository>,
    path: web::Path<String>,
    payload: web::Json<NewRecipe>,
) -> ApiResult<web::Json<Option<Recipe>>> {
    let recipe = repository
        .replace_by_id(&path.into_inner(), payload.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(web::Json(recipe))
}

/// Remove one recipe by identifier.
///
/// Responds 204 whether or not a document existed, matching the store's
/// delete-by-id semantics.
#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    params(("id" = String, Path, description = "Recipe identifier")),
    responses(
        (status = 204, description = "Recipe removed"),
        (status = 500, description = "Storage failure or malformed identifier", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipes/{id}")]
pub async fn delete_recipe(
    repository: web::Data<dyn RecipeRepository>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    repository
        .delete_by_id(&path.into_inner())
        .await
        .map_err(map_persistence_error)?;
    Ok(HttpResponse::NoContent().finish())
}
