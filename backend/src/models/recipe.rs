//! Recipe data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Image used when a recipe is created without one.
pub const DEFAULT_IMAGE: &str = "https://images.media-allrecipes.com/images/75131.jpg";

/// Difficulty rating carried by every recipe.
///
/// The wire strings are fixed; any other value fails deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Level {
    /// Suitable for complete beginners.
    #[serde(rename = "Easy Peasy")]
    EasyPeasy,
    /// Requires some kitchen experience.
    #[serde(rename = "Amateur Chef")]
    AmateurChef,
    /// Demands serious technique.
    #[serde(rename = "UltraPro Chef")]
    UltraProChef,
}

/// Stored recipe as returned by the API.
///
/// The identifier is assigned by the store on creation. JSON field names
/// are camelCase (`isArchived`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    /// Store-assigned document identifier (24-char hex).
    #[schema(example = "65a1f0c2b4de3a5c7e9d1b23")]
    pub id: String,
    /// Display title of the dish.
    #[schema(example = "Shakshuka")]
    pub title: String,
    /// Free-text preparation steps.
    pub instructions: String,
    /// Difficulty rating.
    pub level: Level,
    /// Ingredient lines, in order of use.
    pub ingredients: Vec<String>,
    /// Illustration URL.
    pub image: String,
    /// Preparation time in minutes.
    #[schema(example = 40)]
    pub duration: i64,
    /// Whether the recipe is hidden from regular listings.
    pub is_archived: bool,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

/// Recipe fields supplied by clients on create and replace.
///
/// `image`, `isArchived` and `created` fall back to defaults when omitted,
/// mirroring the storage schema this service replaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    /// Display title of the dish.
    pub title: String,
    /// Free-text preparation steps.
    pub instructions: String,
    /// Difficulty rating.
    pub level: Level,
    /// Ingredient lines, in order of use.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Illustration URL; a stock image when omitted.
    #[serde(default = "default_image")]
    pub image: String,
    /// Preparation time in minutes.
    pub duration: i64,
    /// Whether the recipe is hidden from regular listings.
    #[serde(default)]
    pub is_archived: bool,
    /// Creation timestamp; "now" when omitted.
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
}

fn default_image() -> String {
    DEFAULT_IMAGE.to_owned()
}
