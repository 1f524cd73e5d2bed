use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::ShoppingNotification;
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::get_all::{
    GetAllNotificationsParams, GetAllNotificationsUseCase,
};

pub struct GetAllNotificationsUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllNotificationsUseCase for GetAllNotificationsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllNotificationsParams,
    ) -> Result<Vec<ShoppingNotification>, NotificationError> {
        self.logger
            .debug(&format!("Getting notifications of {}", params.user_id));
        let notifications = self
            .repository
            .get_all(&params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading notifications")?;
        self.logger
            .info(&format!("Retrieved {} notifications", notifications.len()));
        Ok(notifications)
    }
}
