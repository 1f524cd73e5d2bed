use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::{LogStorageFailure, RepositoryError};
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::item::{NewShoppingListItemProps, ShoppingListItem};
use crate::domain::shopping_list::repository::{
    ShoppingListItemRepository, ShoppingListRepository,
};
use crate::domain::shopping_list::use_cases::add_item::{
    AddShoppingListItemParams, AddShoppingListItemUseCase,
};

pub struct AddShoppingListItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ShoppingListItemRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddShoppingListItemUseCase for AddShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        params: AddShoppingListItemParams,
    ) -> Result<ShoppingListItem, ShoppingListError> {
        self.logger.info(&format!(
            "Adding item to shopping list: {}",
            params.shopping_list_id
        ));

        let list = self
            .repository
            .get_by_id(params.shopping_list_id, &params.user_id)
            .await
            .log_failure(self.logger.as_ref(), "Loading shopping list")
            .map_err(ShoppingListError::from_list_lookup)?;

        let ingredient = match params.ingredient_id {
            Some(ingredient_id) => Some(
                self.ingredient_repository
                    .get_by_id(ingredient_id)
                    .await
                    .log_failure(self.logger.as_ref(), "Loading ingredient")
                    .map_err(|e| match e {
                        RepositoryError::NotFound => ShoppingListError::IngredientNotFound,
                        other => ShoppingListError::Repository(other),
                    })?,
            ),
            None => None,
        };

        let item = ShoppingListItem::new(NewShoppingListItemProps {
            shopping_list_id: list.id,
            ingredient,
            custom_name: params.custom_name,
            quantity: params.quantity,
            category: params.category.unwrap_or_default(),
            priority: params.priority.unwrap_or_default(),
            display_order: params.display_order,
            actual_price: params.actual_price,
            notes: params.notes,
        })?;

        self.item_repository
            .save(&item)
            .await
            .log_failure(self.logger.as_ref(), "Saving shopping list item")?;

        self.logger.info(&format!(
            "Shopping list item created: {} ({})",
            item.id,
            item.display_name()
        ));
        Ok(item)
    }
}
