//! MongoDB-backed recipe repository.
//!
//! A typed `Collection<RecipeDocument>` keeps the driver's serde mapping
//! in one place; the port trait sees only domain models. Identifier
//! parsing happens here, so a malformed id surfaces as a persistence
//! error like any other driver failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::models::{Level, NewRecipe, Recipe};

const COLLECTION: &str = "recipes";
const DEFAULT_DATABASE: &str = "recipes-dev";

/// Wire form of a recipe as stored in the collection.
///
/// Field names match the JSON surface (camelCase) so existing documents
/// written by earlier deployments of this service remain readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    title: String,
    instructions: String,
    level: Level,
    ingredients: Vec<String>,
    image: String,
    duration: i64,
    is_archived: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created: DateTime<Utc>,
}

impl RecipeDocument {
    fn from_new(recipe: NewRecipe) -> Self {
        Self {
            id: None,
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

    fn into_model(self) -> Result<Recipe, RecipePersistenceError> {
        let id = self
            .id
            .ok_or_else(|| RecipePersistenceError::query("stored recipe has no identifier"))?;
        Ok(Recipe {
            id: id.to_hex(),
            title: self.title,
            instructions: self.instructions,
            level: self.level,
            ingredients: self.ingredients,
            image: self.image,
            duration: self.duration,
            is_archived: self.is_archived,
            created: self.created,
        })
    }
}

fn connection_error(error: mongodb::error::Error) -> RecipePersistenceError {
    RecipePersistenceError::connection(error.to_string())
}

fn query_error(error: mongodb::error::Error) -> RecipePersistenceError {
    debug!(error = %error, "mongodb operation failed");
    RecipePersistenceError::query(error.to_string())
}

fn parse_object_id(id: &str) -> Result<ObjectId, RecipePersistenceError> {
    ObjectId::parse_str(id).map_err(|_| RecipePersistenceError::malformed_id(id))
}

/// Recipe repository backed by a MongoDB collection.
pub struct MongoRecipeRepository {
    collection: Collection<RecipeDocument>,
}

impl MongoRecipeRepository {
    /// Connect to the deployment named by `uri` and bind the recipe
    /// collection.
    ///
    /// Database precedence: the explicit `database` argument, then the
    /// database named in the connection string, then `recipes-dev`.
    pub async fn connect(
        uri: &str,
        database: Option<&str>,
    ) -> Result<Self, RecipePersistenceError> {
        let client = Client::with_uri_str(uri).await.map_err(connection_error)?;
        let db = match database {
            Some(name) => client.database(name),
            None => client
                .default_database()
                .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
        };
        Ok(Self {
            collection: db.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl RecipeRepository for MongoRecipeRepository {
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RecipePersistenceError> {
        let mut document = RecipeDocument::from_new(recipe);
        let inserted = self
            .collection
            .insert_one(&document)
            .await
            .map_err(query_error)?;
        document.id = inserted.inserted_id.as_object_id();
        document.into_model()
    }

    async fn list(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let cursor = self.collection.find(doc! {}).await.map_err(query_error)?;
        let documents: Vec<RecipeDocument> = cursor.try_collect().await.map_err(query_error)?;
        documents.into_iter().map(RecipeDocument::into_model).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipePersistenceError> {
        let oid = parse_object_id(id)?;
        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(query_error)?;
        document.map(RecipeDocument::into_model).transpose()
    }

    async fn replace_by_id(
        &self,
        id: &str,
        recipe: NewRecipe,
    ) -> Result<Option<Recipe>, RecipePersistenceError> {
        let oid = parse_object_id(id)?;
        let replacement = RecipeDocument::from_new(recipe);
        let document = self
            .collection
            .find_one_and_replace(doc! { "_id": oid }, &replacement)
            .return_document(ReturnDocument::After)
            .await
            .map_err(query_error)?;
        document.map(RecipeDocument::into_model).transpose()
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<Recipe>, RecipePersistenceError> {
        let oid = parse_object_id(id)?;
        let document = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await
            .map_err(query_error)?;
        document.map(RecipeDocument::into_model).transpose()
    }
}
