use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::ingredient::model::Ingredient;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateIngredientRequest {
    /// Ingredient name, unique across the catalog
    pub name: String,
    /// Free-form catalog category (e.g. "vegetables")
    pub category: String,
    /// Default unit of measure (default: "piece")
    #[oai(skip_serializing_if_is_none)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.to_string(),
            name: ingredient.name,
            category: ingredient.category,
            unit: ingredient.unit,
            created_at: ingredient.created_at,
            updated_at: ingredient.updated_at,
        }
    }
}
