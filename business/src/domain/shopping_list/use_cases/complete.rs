use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct CompleteShoppingListParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait CompleteShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: CompleteShoppingListParams) -> Result<(), ShoppingListError>;
}
