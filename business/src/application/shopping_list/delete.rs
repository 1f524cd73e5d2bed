use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};

pub struct DeleteShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingListUseCase for DeleteShoppingListUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingListParams) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Deleting shopping list: {}", params.id));

        // Verify it exists for this user
        self.repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list")
            .map_err(ShoppingListError::from_list_lookup)?;

        self.repository
            .delete(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Deleting shopping list")
            .map_err(ShoppingListError::from_list_lookup)?;

        self.logger
            .info(&format!("Shopping list deleted with its items: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::model::ShoppingList;
    use chrono::{NaiveDate, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ShoppingListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ShoppingListRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingList, RepositoryError>;
            async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
            async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
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

    fn test_user_id() -> UserId {
        UserId::new("test-user-id")
    }

    #[tokio::test]
    async fn should_delete_existing_list() {
        let list_id = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_by_id().returning(move |_, user_id| {
            Ok(ShoppingList::from_repository(
                list_id,
                user_id.clone(),
                "Leftovers".to_string(),
                NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
                vec![],
                false,
                None,
                None,
                String::new(),
                Utc::now(),
                Utc::now(),
            ))
        });
        mock_repo.expect_delete().times(1).returning(|_, _| Ok(()));

        let use_case = DeleteShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingListParams {
                id: list_id,
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_, _| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteShoppingListParams {
                id: Uuid::new_v4(),
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NotFound));
    }
}
