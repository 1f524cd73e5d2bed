use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::LogStorageFailure;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::complete::{
    CompleteShoppingListParams, CompleteShoppingListUseCase,
};

pub struct CompleteShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CompleteShoppingListUseCase for CompleteShoppingListUseCaseImpl {
    async fn execute(&self, params: CompleteShoppingListParams) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Completing shopping list: {}", params.id));

        let mut list = self
            .repository
            .get_by_id(params.id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list")
            .map_err(ShoppingListError::from_list_lookup)?;

        if list.is_completed() {
            self.logger.debug(&format!(
                "Shopping list {} was already completed, refreshing timestamp",
                list.id
            ));
        }

        list.complete(Utc::now());
        self.repository
            .update(&list)
            .await
            .log_failure(self.logger.as_ref(), "Saving completion state")
            .map_err(ShoppingListError::from_list_lookup)?;

        self.logger
            .info(&format!("Shopping list completed: {}", list.id));
        Ok(())
    }
}
