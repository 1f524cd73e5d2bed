use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteShoppingListParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteShoppingListParams) -> Result<(), ShoppingListError>;
}
