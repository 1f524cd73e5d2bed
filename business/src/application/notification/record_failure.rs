use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::record_failure::{
    RecordNotificationFailureParams, RecordNotificationFailureUseCase,
};

pub struct RecordNotificationFailureUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RecordNotificationFailureUseCase for RecordNotificationFailureUseCaseImpl {
    async fn execute(
        &self,
        params: RecordNotificationFailureParams,
    ) -> Result<(), NotificationError> {
        let mut notification = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading notification")
            .map_err(NotificationError::from_lookup)?;

        notification.record_failure(&params.error_message)?;
        self.logger.warn(&format!(
            "Notification {} failed to deliver: {}",
            notification.id, notification.error_message
        ));

        self.repository
            .update(&notification)
            .await
            .log_failure(self.logger.as_ref(), "Saving notification failure")
            .map_err(NotificationError::from_lookup)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::notification::model::{NotificationType, ShoppingNotification};
    use crate::domain::shared::value_objects::UserId;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub NotificationRepo {}

        #[async_trait]
        impl NotificationRepository for NotificationRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingNotification>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingNotification, RepositoryError>;
            async fn save(&self, notification: &ShoppingNotification) -> Result<(), RepositoryError>;
            async fn update(&self, notification: &ShoppingNotification) -> Result<(), RepositoryError>;
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

    fn stored_notification(id: Uuid, sent_at: Option<DateTime<Utc>>) -> ShoppingNotification {
        ShoppingNotification::from_repository(
            id,
            UserId::new("test-user-id"),
            None,
            NotificationType::WeeklyPrep,
            "Weekly prep".to_string(),
            "Plan next week's meals".to_string(),
            sent_at,
            String::new(),
            Utc::now(),
        )
    }

    fn params(id: Uuid) -> RecordNotificationFailureParams {
        RecordNotificationFailureParams {
            id,
            user_id: UserId::new("test-user-id"),
            error_message: "push token expired".to_string(),
        }
    }

    #[tokio::test]
    async fn should_store_error_message() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockNotificationRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(stored_notification(id, None)));
        mock_repo
            .expect_update()
            .withf(|n| !n.is_sent() && n.error_message == "push token expired")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RecordNotificationFailureUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params(id)).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_failure_for_delivered_notification() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockNotificationRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(stored_notification(id, Some(Utc::now()))));
        mock_repo.expect_update().never();

        let use_case = RecordNotificationFailureUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(id)).await;

        assert!(matches!(result.unwrap_err(), NotificationError::AlreadySent));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleted_before_update() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockNotificationRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_, _| Ok(stored_notification(id, None)));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = RecordNotificationFailureUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(id)).await;

        assert!(matches!(result.unwrap_err(), NotificationError::NotFound));
    }
}
