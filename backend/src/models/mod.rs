//! Data models shared by the API and persistence layers.
//!
//! Purpose: Define strongly typed entities used by the HTTP handlers and
//! the storage adapters. Keep types immutable and document serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Recipe / NewRecipe / Level (aliases into `recipe`) — the recipe entity.

pub mod error;
pub mod recipe;

pub use self::error::{Error, ErrorCode};
pub use self::recipe::{Level, NewRecipe, Recipe};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::models::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::internal("boom"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
