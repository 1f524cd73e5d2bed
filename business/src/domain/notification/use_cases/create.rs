use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::{NotificationType, ShoppingNotification};
use crate::domain::shared::value_objects::UserId;

pub struct CreateNotificationParams {
    pub user_id: UserId,
    pub shopping_list_id: Option<Uuid>,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
}

#[async_trait]
pub trait CreateNotificationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateNotificationParams,
    ) -> Result<ShoppingNotification, NotificationError>;
}
