use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::shared::value_objects::UserId;

pub struct RecordNotificationFailureParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub error_message: String,
}

#[async_trait]
pub trait RecordNotificationFailureUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecordNotificationFailureParams,
    ) -> Result<(), NotificationError>;
}
