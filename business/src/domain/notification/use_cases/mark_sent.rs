use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::shared::value_objects::UserId;

pub struct MarkNotificationSentParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait MarkNotificationSentUseCase: Send + Sync {
    async fn execute(&self, params: MarkNotificationSentParams) -> Result<(), NotificationError>;
}
