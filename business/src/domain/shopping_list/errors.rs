use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ShoppingListError {
    #[error("shopping_list.name_empty")]
    NameEmpty,
    #[error("shopping_list.name_too_long")]
    NameTooLong,
    #[error("shopping_list.invalid_generation_period")]
    InvalidGenerationPeriod,
    #[error("shopping_list.item_name_missing")]
    ItemNameMissing,
    #[error("shopping_list.item_name_too_long")]
    ItemNameTooLong,
    #[error("shopping_list.item_name_ambiguous")]
    ItemNameAmbiguous,
    #[error("shopping_list.quantity_empty")]
    QuantityEmpty,
    #[error("shopping_list.quantity_too_long")]
    QuantityTooLong,
    #[error("shopping_list.negative_price")]
    NegativePrice,
    #[error("shopping_list.price_too_precise")]
    PriceTooPrecise,
    #[error("shopping_list.price_too_large")]
    PriceTooLarge,
    #[error("shopping_list.not_found")]
    NotFound,
    #[error("shopping_list.item_not_found")]
    ItemNotFound,
    #[error("shopping_list.ingredient_not_found")]
    IngredientNotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ShoppingListError {
    /// Maps a failed shopping list lookup.
    pub fn from_list_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ShoppingListError::NotFound,
            other => ShoppingListError::Repository(other),
        }
    }

    /// Maps a failed item lookup.
    pub fn from_item_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ShoppingListError::ItemNotFound,
            other => ShoppingListError::Repository(other),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShoppingListError::NameEmpty
                | ShoppingListError::NameTooLong
                | ShoppingListError::InvalidGenerationPeriod
                | ShoppingListError::ItemNameMissing
                | ShoppingListError::ItemNameTooLong
                | ShoppingListError::ItemNameAmbiguous
                | ShoppingListError::QuantityEmpty
                | ShoppingListError::QuantityTooLong
                | ShoppingListError::NegativePrice
                | ShoppingListError::PriceTooPrecise
                | ShoppingListError::PriceTooLarge
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_list_to_not_found() {
        let err = ShoppingListError::from_list_lookup(RepositoryError::NotFound);
        assert!(matches!(err, ShoppingListError::NotFound));
    }

    #[test]
    fn should_map_missing_item_to_item_not_found() {
        let err = ShoppingListError::from_item_lookup(RepositoryError::NotFound);
        assert!(matches!(err, ShoppingListError::ItemNotFound));
    }

    #[test]
    fn should_keep_storage_failures_as_repository_errors() {
        let err = ShoppingListError::from_item_lookup(RepositoryError::DatabaseError);
        assert!(matches!(
            err,
            ShoppingListError::Repository(RepositoryError::DatabaseError)
        ));
        assert!(!err.is_validation());
    }

    #[test]
    fn should_classify_validation_errors() {
        assert!(ShoppingListError::ItemNameMissing.is_validation());
        assert!(ShoppingListError::QuantityEmpty.is_validation());
        assert!(ShoppingListError::QuantityTooLong.is_validation());
        assert!(ShoppingListError::ItemNameTooLong.is_validation());
        assert!(ShoppingListError::PriceTooPrecise.is_validation());
        assert!(ShoppingListError::PriceTooLarge.is_validation());
        assert!(!ShoppingListError::NotFound.is_validation());
    }
}
