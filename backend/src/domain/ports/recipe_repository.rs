//! Port abstraction for recipe persistence adapters and their errors.

use async_trait::async_trait;

use crate::models::{NewRecipe, Recipe};

/// Persistence errors raised by recipe repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipePersistenceError {
    /// Repository connection could not be established.
    #[error("recipe repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("recipe repository query failed: {message}")]
    Query { message: String },
    /// The identifier is not a well-formed document id.
    #[error("malformed recipe identifier: {id}")]
    MalformedId { id: String },
}

impl RecipePersistenceError {
    /// Connection-phase failure.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query-phase failure.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Identifier that could not be parsed.
    pub fn malformed_id(id: impl Into<String>) -> Self {
        Self::MalformedId { id: id.into() }
    }
}

/// Storage operations backing the recipe endpoints, one per endpoint.
///
/// Adapters pass requests straight to the store; the port imposes no
/// ordering or transactional guarantees of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Insert a new recipe and return the stored document.
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RecipePersistenceError>;

    /// Fetch every recipe in the collection.
    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// Fetch one recipe, `None` when no document has the identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// Replace a document wholesale and return it as stored after the
    /// update, `None` when absent.
    async fn replace_by_id(
        &self,
        id: &str,
        recipe: NewRecipe,
    ) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// Remove a document, returning it when it existed.
    async fn delete_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipePersistenceError>;
}
