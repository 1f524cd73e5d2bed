use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::notification::model::{NotificationType, ShoppingNotification};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub user_id: String,
    pub shopping_list_id: Option<Uuid>,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub sent_at: Option<DateTime<Utc>>,
    pub error_message: String,
    pub created_at: DateTime<Utc>,
}

impl NotificationEntity {
    pub fn into_domain(self) -> Result<ShoppingNotification, RepositoryError> {
        let notification_type = self
            .notification_type
            .parse::<NotificationType>()
            .map_err(|e| {
                tracing::error!(target: "persistence", "Corrupt notification {}: {}", self.id, e);
                RepositoryError::Persistence
            })?;

        Ok(ShoppingNotification::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.shopping_list_id,
            notification_type,
            self.title,
            self.message,
            self.sent_at,
            self.error_message,
            self.created_at,
        ))
    }
}
