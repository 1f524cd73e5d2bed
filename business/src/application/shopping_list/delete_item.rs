use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListItemRepository;
use crate::domain::shopping_list::use_cases::delete_item::{
    DeleteShoppingListItemParams, DeleteShoppingListItemUseCase,
};

pub struct DeleteShoppingListItemUseCaseImpl {
    pub item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingListItemUseCase for DeleteShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        params: DeleteShoppingListItemParams,
    ) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Deleting shopping list item: {}", params.id));

        self.item_repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list item")
            .map_err(ShoppingListError::from_item_lookup)?;

        self.item_repository
            .delete(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Deleting shopping list item")
            .map_err(ShoppingListError::from_item_lookup)?;

        self.logger
            .info(&format!("Shopping list item deleted: {}", params.id));
        Ok(())
    }
}
