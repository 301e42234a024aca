//! Test doubles shared by the endpoint tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use backend::domain::ports::{RecipePersistenceError, RecipeRepository};
use backend::models::{NewRecipe, Recipe};

/// In-memory repository with the same observable semantics as the
/// MongoDB adapter: hex identifiers, `None` for absent documents, and a
/// persistence error for malformed identifiers.
#[derive(Default)]
pub struct InMemoryRecipeRepository {
    recipes: Mutex<HashMap<String, Recipe>>,
    next_id: AtomicU64,
}

impl InMemoryRecipeRepository {
    fn mint_id(&self) -> String {
        // 24 hex chars, shaped like a store-assigned document id.
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn check_id(id: &str) -> Result<(), RecipePersistenceError> {
        if id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(())
        } else {
            Err(RecipePersistenceError::malformed_id(id))
        }
    }

    fn materialise(id: String, recipe: NewRecipe) -> Recipe {
        Recipe {
            id,
            title: recipe.title,
            instructions: recipe.instructions,
            level: recipe.level,
            ingredients: recipe.ingredients,
            image: recipe.image,
            duration: recipe.duration,
            is_archived: recipe.is_archived,
            created: recipe.created,
        }
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RecipePersistenceError> {
        let stored = Self::materialise(self.mint_id(), recipe);
        self.recipes
            .lock()
            .expect("repository lock poisoned")
            .insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        Ok(self
            .recipes
            .lock()
            .expect("repository lock poisoned")
            .values()
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipePersistenceError> {
        Self::check_id(id)?;
        Ok(self
            .recipes
            .lock()
            .expect("repository lock poisoned")
            .get(id)
            .cloned())
    }

    async fn replace_by_id(
        &self,
        id: &str,
        recipe: NewRecipe,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        Self::check_id(id)?;
        let mut recipes = self.recipes.lock().expect("repository lock poisoned");
        if !recipes.contains_key(id) {
            return Ok(None);
        }
        let stored = Self::materialise(id.to_owned(), recipe);
        recipes.insert(id.to_owned(), stored.clone());
        Ok(Some(stored))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipePersistenceError> {
        Self::check_id(id)?;
        Ok(self
            .recipes
            .lock()
            .expect("repository lock poisoned")
            .remove(id))
    }
}

/// Repository double whose every operation fails with a connection error.
pub struct FailingRecipeRepository {
    pub message: &'static str,
}

impl FailingRecipeRepository {
    fn fail<T>(&self) -> Result<T, RecipePersistenceError> {
        Err(RecipePersistenceError::connection(self.message))
    }
}

#[async_trait]
impl RecipeRepository for FailingRecipeRepository {
    async fn create(&self, _recipe: NewRecipe) -> Result<Recipe, RecipePersistenceError> {
        self.fail()
    }

    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Recipe>, RecipePersistenceError> {
        self.fail()
    }

    async fn replace_by_id(
        &self,
        _id: &str,
        _recipe: NewRecipe,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: &str) -> Result<Option<Recipe>, RecipePersistenceError> {
        self.fail()
    }
}
