use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::ShoppingListEntity;
use crate::db::map_sqlx_error;

const SELECT_SHOPPING_LIST: &str = r#"SELECT id, user_id, name, target_date, source_menu_ids,
    is_auto_generated, generation_period_start, generation_period_end, completed_at,
    notification_sent_at, notes, created_at, updated_at
    FROM shopping_lists"#;

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "{SELECT_SHOPPING_LIST} WHERE user_id = $1 ORDER BY target_date DESC, created_at DESC"
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Listing shopping lists", e))?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(&format!(
            "{SELECT_SHOPPING_LIST} WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Loading shopping list", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let period = list.generation_period.as_ref();

        sqlx::query(
            r#"INSERT INTO shopping_lists (id, user_id, name, target_date, source_menu_ids,
                is_auto_generated, generation_period_start, generation_period_end,
                is_completed, completed_at, is_notified, notification_sent_at, notes,
                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)"#,
        )
        .bind(list.id)
        .bind(list.user_id.as_str())
        .bind(&list.name)
        .bind(list.target_date)
        .bind(&list.source_menu_ids)
        .bind(list.is_auto_generated)
        .bind(period.map(|p| p.start))
        .bind(period.map(|p| p.end))
        .bind(list.is_completed())
        .bind(list.completed_at)
        .bind(list.is_notified())
        .bind(list.notification_sent_at)
        .bind(&list.notes)
        .bind(list.created_at)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Saving shopping list", e))?;

        Ok(())
    }

    async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE shopping_lists SET
                name = $3,
                target_date = $4,
                source_menu_ids = $5,
                is_completed = $6,
                completed_at = $7,
                is_notified = $8,
                notification_sent_at = $9,
                notes = $10,
                updated_at = $11
            WHERE id = $1 AND user_id = $2"#,
        )
        .bind(list.id)
        .bind(list.user_id.as_str())
        .bind(&list.name)
        .bind(list.target_date)
        .bind(&list.source_menu_ids)
        .bind(list.is_completed())
        .bind(list.completed_at)
        .bind(list.is_notified())
        .bind(list.notification_sent_at)
        .bind(&list.notes)
        .bind(list.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Updating shopping list", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM shopping_lists WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Deleting shopping list", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
