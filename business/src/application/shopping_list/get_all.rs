use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListSummary;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::{
    ShoppingListItemRepository, ShoppingListRepository,
};
use crate::domain::shopping_list::use_cases::get_all::{
    GetAllShoppingListsParams, GetAllShoppingListsUseCase,
};

pub struct GetAllShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllShoppingListsUseCase for GetAllShoppingListsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllShoppingListsParams,
    ) -> Result<Vec<ShoppingListSummary>, ShoppingListError> {
        self.logger
            .info(&format!("Getting shopping lists of {}", params.user_id));

        let lists = self
            .repository
            .get_all(&params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping lists")?;

        let mut summaries = Vec::with_capacity(lists.len());
        for list in lists {
            let items = self
                .item_repository
                .get_by_list(list.id)
                .await
                .log_failure(self.logger.as_ref(), "Loading shopping list items")?;
            summaries.push(ShoppingListSummary::new(list, &items));
        }

        self.logger
            .info(&format!("Retrieved {} shopping lists", summaries.len()));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_list::item::{ItemSource, ShoppingListItem};
    use crate::domain::shopping_list::model::ShoppingList;
    use crate::domain::shopping_list::value_objects::{ItemCategory, ItemPriority};
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
        pub ShoppingListItemRepo {}

        #[async_trait]
        impl ShoppingListItemRepository for ShoppingListItemRepo {
            async fn get_by_list(&self, shopping_list_id: Uuid) -> Result<Vec<ShoppingListItem>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingListItem, RepositoryError>;
            async fn save(&self, item: &ShoppingListItem) -> Result<(), RepositoryError>;
            async fn update(&self, item: &ShoppingListItem) -> Result<(), RepositoryError>;
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

    fn stored_list(id: Uuid, name: &str) -> ShoppingList {
        ShoppingList::from_repository(
            id,
            test_user_id(),
            name.to_string(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            vec![],
            false,
            None,
            None,
            String::new(),
            Utc::now(),
            Utc::now(),
        )
    }

    fn stored_item(list_id: Uuid, purchased: bool) -> ShoppingListItem {
        ShoppingListItem::from_repository(
            Uuid::new_v4(),
            list_id,
            ItemSource::Custom {
                name: "Milk".to_string(),
            },
            "1 l".to_string(),
            ItemCategory::Dairy,
            purchased.then(Utc::now),
            None,
            1,
            ItemPriority::Medium,
            String::new(),
        )
    }

    #[tokio::test]
    async fn should_attach_stats_to_each_list() {
        let first_id = Uuid::new_v4();
        let second_id = Uuid::new_v4();

        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(move |_| {
            Ok(vec![
                stored_list(first_id, "Monday"),
                stored_list(second_id, "Thursday"),
            ])
        });

        let mut mock_item_repo = MockShoppingListItemRepo::new();
        mock_item_repo.expect_get_by_list().returning(move |list_id| {
            if list_id == first_id {
                Ok(vec![
                    stored_item(list_id, true),
                    stored_item(list_id, false),
                    stored_item(list_id, false),
                ])
            } else {
                Ok(vec![])
            }
        });

        let use_case = GetAllShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            item_repository: Arc::new(mock_item_repo),
            logger: mock_logger(),
        };

        let summaries = use_case
            .execute(GetAllShoppingListsParams {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].stats.total_items, 3);
        assert_eq!(summaries[0].stats.completed_items, 1);
        assert_eq!(summaries[0].stats.completion_rate, 33.3);
        assert_eq!(summaries[1].stats.total_items, 0);
        assert_eq!(summaries[1].stats.completion_rate, 0.0);
    }

    #[tokio::test]
    async fn should_return_empty_when_user_has_no_lists() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_get_all().returning(|_| Ok(vec![]));
        let mock_item_repo = MockShoppingListItemRepo::new();

        let use_case = GetAllShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            item_repository: Arc::new(mock_item_repo),
            logger: mock_logger(),
        };

        let summaries = use_case
            .execute(GetAllShoppingListsParams {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(summaries.is_empty());
    }

    #[tokio::test]
    async fn should_fail_when_items_cannot_be_loaded() {
        let list_id = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all()
            .returning(move |_| Ok(vec![stored_list(list_id, "Monday")]));
        let mut mock_item_repo = MockShoppingListItemRepo::new();
        mock_item_repo
            .expect_get_by_list()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            item_repository: Arc::new(mock_item_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllShoppingListsParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[tokio::test]
    async fn should_log_failure_when_lists_cannot_be_loaded() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let mock_item_repo = MockShoppingListItemRepo::new();

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message.starts_with("Loading shopping lists failed"))
            .times(1)
            .returning(|_| ());

        let use_case = GetAllShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            item_repository: Arc::new(mock_item_repo),
            logger: Arc::new(logger),
        };

        let result = use_case
            .execute(GetAllShoppingListsParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
