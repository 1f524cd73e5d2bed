use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::aggregator::ShoppingListDetails;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::{
    ShoppingListItemRepository, ShoppingListRepository,
};
use crate::domain::shopping_list::use_cases::get_by_id::{
    GetShoppingListByIdParams, GetShoppingListByIdUseCase,
};

pub struct GetShoppingListByIdUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListByIdUseCase for GetShoppingListByIdUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListByIdParams,
    ) -> Result<ShoppingListDetails, ShoppingListError> {
        self.logger
            .info(&format!("Fetching shopping list by id: {}", params.id));

        let list = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list")
            .map_err(ShoppingListError::from_list_lookup)?;

        let items = self
            .item_repository
            .get_by_list(list.id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list items")?;
        let details = ShoppingListDetails::new(list, items);

        self.logger.debug(&format!(
            "Shopping list {} is {}% complete",
            details.list.id, details.stats.completion_rate
        ));
        Ok(details)
    }
}
