use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{LogStorageFailure, RepositoryError};
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateIngredientUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIngredientUseCase for CreateIngredientUseCaseImpl {
    async fn execute(&self, params: CreateIngredientParams) -> Result<Ingredient, IngredientError> {
        self.logger
            .info(&format!("Creating ingredient: {}", params.name));

        let ingredient = Ingredient::new(params.name, params.category, params.unit)?;

        self.repository
            .save(&ingredient)
            .await
            .log_failure(self.logger.as_ref(), "Saving ingredient")
            .map_err(|e| match e {
                RepositoryError::Duplicated => IngredientError::AlreadyExists,
                other => IngredientError::Repository(other),
            })?;

        self.logger
            .info(&format!("Ingredient created: {}", ingredient.id));
        Ok(ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn get_all(&self) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
            async fn save(&self, ingredient: &Ingredient) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_create_ingredient_when_valid() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_save()
            .withf(|i| i.name == "Carrot")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateIngredientUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateIngredientParams {
                name: "Carrot".to_string(),
                category: "vegetables".to_string(),
                unit: Some("piece".to_string()),
            })
            .await;

        let ingredient = result.unwrap();
        assert_eq!(ingredient.name, "Carrot");
        assert_eq!(ingredient.unit, "piece");
    }

    #[tokio::test]
    async fn should_reject_when_name_empty() {
        let mock_repo = MockIngredientRepo::new();

        let use_case = CreateIngredientUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateIngredientParams {
                name: "".to_string(),
                category: String::new(),
                unit: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::NameEmpty));
    }

    #[tokio::test]
    async fn should_report_conflict_when_name_taken() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateIngredientUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateIngredientParams {
                name: "Soy sauce".to_string(),
                category: "seasonings".to_string(),
                unit: Some("ml".to_string()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::AlreadyExists));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateIngredientUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateIngredientParams {
                name: "Rice".to_string(),
                category: "grains".to_string(),
                unit: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
