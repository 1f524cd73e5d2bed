use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::{NewNotificationProps, ShoppingNotification};
use crate::domain::notification::repository::NotificationRepository;
use crate::domain::notification::use_cases::create::{
    CreateNotificationParams, CreateNotificationUseCase,
};
use crate::domain::shopping_list::repository::ShoppingListRepository;

pub struct CreateNotificationUseCaseImpl {
    pub repository: Arc<dyn NotificationRepository>,
    pub shopping_list_repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateNotificationUseCase for CreateNotificationUseCaseImpl {
    async fn execute(
        &self,
        params: CreateNotificationParams,
    ) -> Result<ShoppingNotification, NotificationError> {
        self.logger.info(&format!(
            "Creating {} notification for {}",
            params.notification_type, params.user_id
        ));

        if let Some(list_id) = params.shopping_list_id {
            self.shopping_list_repository
                .get_by_id(list_id, &params.user_id)
                .await
                .log_failure(self.logger.as_ref(), "Loading shopping list")
                .map_err(NotificationError::from_list_lookup)?;
        }

        let notification = ShoppingNotification::new(NewNotificationProps {
            user_id: params.user_id,
            shopping_list_id: params.shopping_list_id,
            notification_type: params.notification_type,
            title: params.title,
            message: params.message,
        })?;

        self.repository
            .save(&notification)
            .await
            .log_failure(self.logger.as_ref(), "Saving notification")?;

        self.logger
            .info(&format!("Notification created: {}", notification.id));
        Ok(notification)
    }
}
