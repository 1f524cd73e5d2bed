use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shopping_list::item::{ItemSource, ShoppingListItem};
use business::domain::shopping_list::value_objects::{ItemCategory, ItemPriority};

/// Item row joined with the name of its catalog ingredient, if any.
#[derive(Debug, FromRow)]
pub struct ShoppingListItemEntity {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub ingredient_id: Option<Uuid>,
    pub ingredient_name: Option<String>,
    pub custom_name: String,
    pub quantity: String,
    pub category: String,
    pub purchased_at: Option<DateTime<Utc>>,
    pub actual_price: Option<BigDecimal>,
    pub display_order: i32,
    pub priority: String,
    pub notes: String,
}

impl ShoppingListItemEntity {
    pub fn into_domain(self) -> Result<ShoppingListItem, RepositoryError> {
        let category = self
            .category
            .parse::<ItemCategory>()
            .map_err(|e| corrupt_row(self.id, &e))?;
        let priority = self
            .priority
            .parse::<ItemPriority>()
            .map_err(|e| corrupt_row(self.id, &e))?;
        let display_order =
            u32::try_from(self.display_order).map_err(|e| corrupt_row(self.id, &e))?;

        let source = match self.ingredient_id {
            Some(ingredient_id) => ItemSource::Catalog {
                ingredient_id,
                name: self.ingredient_name.unwrap_or_default(),
            },
            None => ItemSource::Custom {
                name: self.custom_name,
            },
        };

        Ok(ShoppingListItem::from_repository(
            self.id,
            self.shopping_list_id,
            source,
            self.quantity,
            category,
            self.purchased_at,
            self.actual_price,
            display_order,
            priority,
            self.notes,
        ))
    }
}

fn corrupt_row(id: Uuid, cause: &dyn std::fmt::Display) -> RepositoryError {
    tracing::error!(target: "persistence", "Corrupt shopping list item {}: {}", id, cause);
    RepositoryError::Persistence
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row() -> ShoppingListItemEntity {
        ShoppingListItemEntity {
            id: Uuid::new_v4(),
            shopping_list_id: Uuid::new_v4(),
            ingredient_id: None,
            ingredient_name: None,
            custom_name: "Dish soap".to_string(),
            quantity: "1 bottle".to_string(),
            category: "others".to_string(),
            purchased_at: None,
            actual_price: None,
            display_order: 3,
            priority: "low".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn should_name_catalog_item_after_joined_ingredient() {
        let ingredient_id = Uuid::new_v4();
        let mut entity = row();
        entity.ingredient_id = Some(ingredient_id);
        entity.ingredient_name = Some("Carrot".to_string());
        entity.custom_name = String::new();
        entity.category = "vegetables".to_string();

        let item = entity.into_domain().unwrap();

        assert_eq!(item.display_name(), "Carrot");
        assert_eq!(item.source.ingredient_id(), Some(ingredient_id));
        assert_eq!(item.category, ItemCategory::Vegetables);
    }

    #[test]
    fn should_keep_custom_name_without_ingredient() {
        let mut entity = row();
        entity.purchased_at = Some(Utc::now());
        entity.actual_price = Some(BigDecimal::from_str("2.49").unwrap());

        let item = entity.into_domain().unwrap();

        assert_eq!(item.display_name(), "Dish soap");
        assert!(item.is_purchased());
        assert_eq!(item.display_order, 3);
        assert_eq!(item.priority, ItemPriority::Low);
    }

    #[test]
    fn should_reject_unknown_category() {
        let mut entity = row();
        entity.category = "toys".to_string();

        assert_eq!(entity.into_domain().unwrap_err(), RepositoryError::Persistence);
    }

    #[test]
    fn should_reject_negative_order() {
        let mut entity = row();
        entity.display_order = -1;

        assert_eq!(entity.into_domain().unwrap_err(), RepositoryError::Persistence);
    }
}
