use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::notification::model::ShoppingNotification;
use business::domain::notification::repository::NotificationRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::NotificationEntity;
use crate::db::map_sqlx_error;

const SELECT_NOTIFICATION: &str = r#"SELECT id, user_id, shopping_list_id, notification_type,
    title, message, sent_at, error_message, created_at
    FROM shopping_notifications"#;

pub struct NotificationRepositoryPostgres {
    pool: PgPool,
}

impl NotificationRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for NotificationRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingNotification>, RepositoryError> {
        let entities = sqlx::query_as::<_, NotificationEntity>(&format!(
            "{SELECT_NOTIFICATION} WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Listing notifications", e))?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        user_id: &UserId,
    ) -> Result<ShoppingNotification, RepositoryError> {
        let entity = sqlx::query_as::<_, NotificationEntity>(&format!(
            "{SELECT_NOTIFICATION} WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Loading notification", e))?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, notification: &ShoppingNotification) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO shopping_notifications (id, user_id, shopping_list_id,
                notification_type, title, message, is_sent, sent_at, error_message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)"#,
        )
        .bind(notification.id)
        .bind(notification.user_id.as_str())
        .bind(notification.shopping_list_id)
        .bind(notification.notification_type.to_string())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.is_sent())
        .bind(notification.sent_at)
        .bind(&notification.error_message)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Saving notification", e))?;

        Ok(())
    }

    async fn update(&self, notification: &ShoppingNotification) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE shopping_notifications
            SET is_sent = $3, sent_at = $4, error_message = $5
            WHERE id = $1 AND user_id = $2"#,
        )
        .bind(notification.id)
        .bind(notification.user_id.as_str())
        .bind(notification.is_sent())
        .bind(notification.sent_at)
        .bind(&notification.error_message)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Updating notification", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
