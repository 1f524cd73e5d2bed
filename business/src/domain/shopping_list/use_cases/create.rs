use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::aggregator::ShoppingListSummary;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct CreateShoppingListParams {
    pub user_id: UserId,
    pub name: String,
    pub target_date: NaiveDate,
    pub notes: String,
    pub source_menu_ids: Vec<Uuid>,
    pub is_auto_generated: bool,
    pub generation_period: Option<(NaiveDate, NaiveDate)>,
}

#[async_trait]
pub trait CreateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateShoppingListParams,
    ) -> Result<ShoppingListSummary, ShoppingListError>;
}
