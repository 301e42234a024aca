//! Port traits decoupling the HTTP layer from concrete storage.

pub mod recipe_repository;

pub use recipe_repository::{RecipePersistenceError, RecipeRepository};

#[cfg(test)]
pub use recipe_repository::MockRecipeRepository;
