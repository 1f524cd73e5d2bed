use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::ShoppingNotification;
use crate::domain::shared::value_objects::UserId;

pub struct GetAllNotificationsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllNotificationsParams,
    ) -> Result<Vec<ShoppingNotification>, NotificationError>;
}
