use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::mark_sent::{
    MarkNotificationSentParams, MarkNotificationSentUseCase,
};
use crate::domain::shopping_list::repository::ShoppingListRepository;

/// Marks a notification delivered and flags its shopping list as notified.
pub struct MarkNotificationSentUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub shopping_list_repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkNotificationSentUseCase for MarkNotificationSentUseCaseImpl {
    async fn execute(&self, params: MarkNotificationSentParams) -> Result<(), NotificationError> {
        self.logger
            .info(&format!("Marking notification sent: {}", params.id));

        let mut notification = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading notification")
            .map_err(NotificationError::from_lookup)?;

        let now = Utc::now();
        notification.mark_sent(now);
        self.repository
            .update(&notification)
            .await
            .log_failure(self.logger.as_ref(), "Saving notification delivery")
            .map_err(NotificationError::from_lookup)?;

        if let Some(list_id) = notification.shopping_list_id {
            let mut list = self
                .shopping_list_repository
                .get_by_id(list_id, &params.user_id)
                .await
                .log_failure(self.logger.as_ref(), "Loading shopping list")
                .map_err(NotificationError::from_list_lookup)?;

            list.mark_notified(now);
            self.shopping_list_repository
                .update(&list)
                .await
                .log_failure(self.logger.as_ref(), "Saving shopping list notification")
                .map_err(NotificationError::from_list_lookup)?;
        }

        self.logger
            .info(&format!("Notification sent: {}", notification.id));
        Ok(())
    }
}
