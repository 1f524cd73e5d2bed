use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_all::GetAllIngredientsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllIngredientsUseCase for GetAllIngredientsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Ingredient>, IngredientError> {
        self.logger.debug("Getting ingredient catalog");
        let ingredients = self
            .repository
            .get_all()
            .await
            .log_failure(self.logger.as_ref(), "Loading ingredients")?;
        self.logger
            .info(&format!("Retrieved {} ingredients", ingredients.len()));
        Ok(ingredients)
    }
}
