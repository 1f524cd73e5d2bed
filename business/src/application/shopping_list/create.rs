use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListSummary;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::{GenerationPeriod, NewShoppingListProps, ShoppingList};
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};

pub struct CreateShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateShoppingListUseCase for CreateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: CreateShoppingListParams,
    ) -> Result<ShoppingListSummary, ShoppingListError> {
        self.logger.info(&format!(
            "Creating shopping list '{}' for {}",
            params.name, params.target_date
        ));

        let generation_period = params
            .generation_period
            .map(|(start, end)| GenerationPeriod::new(start, end))
            .transpose()?;

        let list = ShoppingList::new(NewShoppingListProps {
            user_id: params.user_id,
            name: params.name,
            target_date: params.target_date,
            notes: params.notes,
            source_menu_ids: params.source_menu_ids,
            is_auto_generated: params.is_auto_generated,
            generation_period,
        })?;

        self.repository
            .save(&list)
            .await
            .log_failure(self.logger.as_ref(), "Saving shopping list")?;

        self.logger
            .info(&format!("Shopping list created: {}", list.id));
        Ok(ShoppingListSummary::new(list, &[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use chrono::NaiveDate;
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

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn params(name: &str) -> CreateShoppingListParams {
        CreateShoppingListParams {
            user_id: test_user_id(),
            name: name.to_string(),
            target_date: date(15),
            notes: String::new(),
            source_menu_ids: vec![],
            is_auto_generated: false,
            generation_period: None,
        }
    }

    #[tokio::test]
    async fn should_create_list_with_empty_stats() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_save()
            .withf(|list| list.user_id.as_str() == "test-user-id" && !list.is_completed())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let summary = use_case.execute(params("Wednesday run")).await.unwrap();

        assert_eq!(summary.list.name, "Wednesday run");
        assert_eq!(summary.stats.total_items, 0);
        assert_eq!(summary.stats.completion_rate, 0.0);
    }

    #[tokio::test]
    async fn should_record_generation_metadata() {
        let menu_id = Uuid::new_v4();
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut p = params("Week 24");
        p.source_menu_ids = vec![menu_id];
        p.is_auto_generated = true;
        p.generation_period = Some((date(10), date(16)));

        let summary = use_case.execute(p).await.unwrap();

        assert!(summary.list.is_auto_generated);
        assert_eq!(summary.list.source_menu_ids, vec![menu_id]);
        assert_eq!(
            summary.list.generation_period,
            Some(GenerationPeriod {
                start: date(10),
                end: date(16)
            })
        );
    }

    #[tokio::test]
    async fn should_reject_when_name_empty() {
        let mock_repo = MockShoppingListRepo::new();

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_inverted_period() {
        let mock_repo = MockShoppingListRepo::new();

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut p = params("Week 24");
        p.generation_period = Some((date(16), date(10)));

        let result = use_case.execute(p).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::InvalidGenerationPeriod
        ));
    }

    #[tokio::test]
    async fn should_propagate_persistence_failure() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Wednesday run")).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
