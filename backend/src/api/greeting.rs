//! Landing route.

use actix_web::http::header::ContentType;
use actix_web::{get, HttpResponse};

/// Static greeting served at the root path.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting page", body = String, content_type = "text/html")
    ),
    tags = ["meta"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body("<h1>Recipes API</h1>")
}
