use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingNotification;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Newest first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingNotification>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: Uuid,
        user_id: &UserId,
    ) -> Result<ShoppingNotification, RepositoryError>;
    async fn save(&self, notification: &ShoppingNotification) -> Result<(), RepositoryError>;
    /// Writes back delivery state; `NotFound` when the row is gone.
    async fn update(&self, notification: &ShoppingNotification) -> Result<(), RepositoryError>;
}
