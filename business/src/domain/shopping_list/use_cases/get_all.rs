use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::aggregator::ShoppingListSummary;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct GetAllShoppingListsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetAllShoppingListsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllShoppingListsParams,
    ) -> Result<Vec<ShoppingListSummary>, ShoppingListError>;
}
