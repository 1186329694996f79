pub mod pagination;
pub mod route;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid recipe id: {0:?}")]
    InvalidId(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(transparent)]
pub struct RecipeId(pub u32);

impl FromStr for RecipeId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.parse::<u32>() {
            Ok(id) if id > 0 => Ok(RecipeId(id)),
            _ => Err(Error::InvalidId(value.to_string())),
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One card of the recipe listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub meal_type: Vec<String>,
}

impl RecipeSummary {
    pub fn badges(&self, limit: usize) -> &[String] {
        badges(&self.tags, &self.meal_type, limit)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub prep_time_minutes: u32,
    #[serde(default)]
    pub cook_time_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub calories_per_serving: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub meal_type: Vec<String>,
}

impl RecipeDetail {
    pub fn total_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }

    pub fn badges(&self, limit: usize) -> &[String] {
        badges(&self.tags, &self.meal_type, limit)
    }

    pub fn ingredient_line(&self) -> String {
        self.ingredients.join(", ")
    }

    pub fn meal_type_line(&self) -> String {
        self.meal_type.join(", ")
    }

    pub fn review_count_label(&self) -> String {
        self.review_count
            .map(|count| count.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Tags win over meal types; meal types only fill in when a recipe has no tags.
fn badges<'a>(tags: &'a [String], meal_type: &'a [String], limit: usize) -> &'a [String] {
    let source = if tags.is_empty() { meal_type } else { tags };
    &source[..source.len().min(limit)]
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}
