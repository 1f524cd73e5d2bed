use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::item::ShoppingListItem;
use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid, user_id: &UserId) -> Result<ShoppingList, RepositoryError>;
    /// Inserts a new list.
    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    /// Writes back an existing list; `NotFound` when the row is gone.
    async fn update(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    /// Deletes the list; its items go with it.
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}

/// Items are always reached through a list owned by `user_id`.
#[async_trait]
pub trait ShoppingListItemRepository: Send + Sync {
    async fn get_by_list(
        &self,
        shopping_list_id: Uuid,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn get_by_id(
        &self,
        id: Uuid,
        user_id: &UserId,
    ) -> Result<ShoppingListItem, RepositoryError>;
    /// Inserts a new item.
    async fn save(&self, item: &ShoppingListItem) -> Result<(), RepositoryError>;
    /// Writes back an existing item; `NotFound` when the row is gone.
    async fn update(&self, item: &ShoppingListItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid, user_id: &UserId) -> Result<(), RepositoryError>;
}
