use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::item::ShoppingListItem;
use business::domain::shopping_list::repository::ShoppingListItemRepository;

use super::entity::ShoppingListItemEntity;
use crate::db::map_sqlx_error;

const SELECT_ITEM: &str = r#"SELECT i.id, i.shopping_list_id, i.ingredient_id,
    ing.name AS ingredient_name, i.custom_name, i.quantity, i.category, i.purchased_at,
    i.actual_price, i."order" AS display_order, i.priority, i.notes
    FROM shopping_list_items i
    LEFT JOIN ingredients ing ON ing.id = i.ingredient_id"#;

pub struct ShoppingListItemRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListItemRepository for ShoppingListItemRepositoryPostgres {
    async fn get_by_list(
        &self,
        shopping_list_id: Uuid,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            r#"{SELECT_ITEM} WHERE i.shopping_list_id = $1 ORDER BY i.category, i."order", i.id"#
        ))
        .bind(shopping_list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Listing shopping list items", e))?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_id(
        &self,
        id: Uuid,
        user_id: &UserId,
    ) -> Result<ShoppingListItem, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            r#"{SELECT_ITEM}
            JOIN shopping_lists l ON l.id = i.shopping_list_id
            WHERE i.id = $1 AND l.user_id = $2"#
        ))
        .bind(id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Loading shopping list item", e))?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn save(&self, item: &ShoppingListItem) -> Result<(), RepositoryError> {
        let display_order =
            i32::try_from(item.display_order).map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO shopping_list_items (id, shopping_list_id, ingredient_id, custom_name,
                quantity, category, is_purchased, purchased_at, actual_price, "order",
                priority, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"#,
        )
        .bind(item.id)
        .bind(item.shopping_list_id)
        .bind(item.source.ingredient_id())
        .bind(item.source.custom_name())
        .bind(&item.quantity)
        .bind(item.category.to_string())
        .bind(item.is_purchased())
        .bind(item.purchased_at)
        .bind(&item.actual_price)
        .bind(display_order)
        .bind(item.priority.to_string())
        .bind(&item.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Saving shopping list item", e))?;

        Ok(())
    }

    async fn update(&self, item: &ShoppingListItem) -> Result<(), RepositoryError> {
        let display_order =
            i32::try_from(item.display_order).map_err(|_| RepositoryError::Persistence)?;

        let result = sqlx::query(
            r#"UPDATE shopping_list_items SET
                quantity = $2,
                category = $3,
                is_purchased = $4,
                purchased_at = $5,
                actual_price = $6,
                "order" = $7,
                priority = $8,
                notes = $9
            WHERE id = $1"#,
        )
        .bind(item.id)
        .bind(&item.quantity)
        .bind(item.category.to_string())
        .bind(item.is_purchased())
        .bind(item.purchased_at)
        .bind(&item.actual_price)
        .bind(display_order)
        .bind(item.priority.to_string())
        .bind(&item.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Updating shopping list item", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"DELETE FROM shopping_list_items i
            USING shopping_lists l
            WHERE i.id = $1 AND l.id = i.shopping_list_id AND l.user_id = $2"#,
        )
        .bind(id)
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Deleting shopping list item", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
