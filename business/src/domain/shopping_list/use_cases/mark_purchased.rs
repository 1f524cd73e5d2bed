use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct MarkItemPurchasedParams {
    pub id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait MarkItemPurchasedUseCase: Send + Sync {
    async fn execute(&self, params: MarkItemPurchasedParams) -> Result<(), ShoppingListError>;
}
