use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteShoppingListItemParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteShoppingListItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteShoppingListItemParams)
    -> Result<(), ShoppingListError>;
}
