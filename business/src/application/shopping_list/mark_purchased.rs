use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListItemRepository;
use crate::domain::shopping_list::use_cases::mark_purchased::{
    MarkItemPurchasedParams, MarkItemPurchasedUseCase,
};

pub struct MarkItemPurchasedUseCaseImpl {
    pub item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkItemPurchasedUseCase for MarkItemPurchasedUseCaseImpl {
    async fn execute(&self, params: MarkItemPurchasedParams) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Marking shopping list item purchased: {}", params.id));

        let mut item = self
            .item_repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list item")
            .map_err(ShoppingListError::from_item_lookup)?;

        item.mark_purchased(Utc::now());

        self.item_repository
            .update(&item)
            .await
            .log_failure(self.logger.as_ref(), "Saving purchase state")
            .map_err(ShoppingListError::from_item_lookup)?;

        self.logger.info(&format!(
            "Shopping list item purchased: {} ({})",
            item.id,
            item.display_name()
        ));
        Ok(())
    }
}
