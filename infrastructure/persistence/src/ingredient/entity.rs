use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::ingredient::model::Ingredient;

#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient::from_repository(
            self.id,
            self.name,
            self.category,
            self.unit,
            self.created_at,
            self.updated_at,
        )
    }
}
