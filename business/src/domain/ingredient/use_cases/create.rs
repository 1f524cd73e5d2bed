use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct CreateIngredientParams {
    pub name: String,
    pub category: String,
    pub unit: Option<String>,
}

#[async_trait]
pub trait CreateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError>;
}
