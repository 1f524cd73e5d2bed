use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::item::ShoppingListItem;
use crate::domain::shopping_list::value_objects::{ItemCategory, ItemPriority};

pub struct AddShoppingListItemParams {
    pub user_id: UserId,
    pub shopping_list_id: Uuid,
    pub ingredient_id: Option<Uuid>,
    pub custom_name: Option<String>,
    pub quantity: String,
    pub category: Option<ItemCategory>,
    pub priority: Option<ItemPriority>,
    pub display_order: Option<u32>,
    pub actual_price: Option<BigDecimal>,
    pub notes: String,
}

#[async_trait]
pub trait AddShoppingListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddShoppingListItemParams,
    ) -> Result<ShoppingListItem, ShoppingListError>;
}
