use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::aggregator::ShoppingListDetails;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct GetShoppingListByIdParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait GetShoppingListByIdUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingListByIdParams,
    ) -> Result<ShoppingListDetails, ShoppingListError>;
}
