use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Signed;
use uuid::Uuid;

use super::errors::ShoppingListError;
use super::value_objects::{ItemCategory, ItemPriority};
use crate::domain::ingredient::model::Ingredient;

pub const DEFAULT_DISPLAY_ORDER: u32 = 1;
const ITEM_NAME_MAX_LEN: usize = 100;
const QUANTITY_MAX_LEN: usize = 50;
/// Prices are stored as NUMERIC(10, 2).
const PRICE_SCALE: i64 = 2;
const PRICE_LIMIT: u64 = 100_000_000;

/// Where an item's name comes from. An item is backed by exactly one source.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSource {
    Catalog { ingredient_id: Uuid, name: String },
    Custom { name: String },
}

impl ItemSource {
    pub fn ingredient_id(&self) -> Option<Uuid> {
        match self {
            ItemSource::Catalog { ingredient_id, .. } => Some(*ingredient_id),
            ItemSource::Custom { .. } => None,
        }
    }

    /// Free-text name as stored; empty for catalog-backed items.
    pub fn custom_name(&self) -> &str {
        match self {
            ItemSource::Catalog { .. } => "",
            ItemSource::Custom { name } => name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub source: ItemSource,
    pub quantity: String,
    pub category: ItemCategory,
    pub purchased_at: Option<DateTime<Utc>>,
    pub actual_price: Option<BigDecimal>,
    pub display_order: u32,
    pub priority: ItemPriority,
    pub notes: String,
}

pub struct NewShoppingListItemProps {
    pub shopping_list_id: Uuid,
    pub ingredient: Option<Ingredient>,
    pub custom_name: Option<String>,
    pub quantity: String,
    pub category: ItemCategory,
    pub priority: ItemPriority,
    pub display_order: Option<u32>,
    pub actual_price: Option<BigDecimal>,
    pub notes: String,
}

impl ShoppingListItem {
    pub fn new(props: NewShoppingListItemProps) -> Result<Self, ShoppingListError> {
        let custom_name = props
            .custom_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let source = match (props.ingredient, custom_name) {
            (Some(_), Some(_)) => return Err(ShoppingListError::ItemNameAmbiguous),
            (None, None) => return Err(ShoppingListError::ItemNameMissing),
            (Some(ingredient), None) => ItemSource::Catalog {
                ingredient_id: ingredient.id,
                name: ingredient.name,
            },
            (None, Some(name)) => {
                if name.chars().count() > ITEM_NAME_MAX_LEN {
                    return Err(ShoppingListError::ItemNameTooLong);
                }
                ItemSource::Custom { name }
            }
        };

        let quantity = props.quantity.trim().to_string();
        if quantity.is_empty() {
            return Err(ShoppingListError::QuantityEmpty);
        }
        if quantity.chars().count() > QUANTITY_MAX_LEN {
            return Err(ShoppingListError::QuantityTooLong);
        }

        let actual_price = props.actual_price.map(validate_price).transpose()?;

        Ok(Self {
            id: Uuid::new_v4(),
            shopping_list_id: props.shopping_list_id,
            source,
            quantity,
            category: props.category,
            purchased_at: None,
            actual_price,
            display_order: props.display_order.unwrap_or(DEFAULT_DISPLAY_ORDER),
            priority: props.priority,
            notes: props.notes,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        shopping_list_id: Uuid,
        source: ItemSource,
        quantity: String,
        category: ItemCategory,
        purchased_at: Option<DateTime<Utc>>,
        actual_price: Option<BigDecimal>,
        display_order: u32,
        priority: ItemPriority,
        notes: String,
    ) -> Self {
        Self {
            id,
            shopping_list_id,
            source,
            quantity,
            category,
            purchased_at,
            actual_price,
            display_order,
            priority,
            notes,
        }
    }

    pub fn is_purchased(&self) -> bool {
        self.purchased_at.is_some()
    }

    /// Catalog ingredient name when the item references one, otherwise the custom name.
    pub fn display_name(&self) -> &str {
        match &self.source {
            ItemSource::Catalog { name, .. } => name,
            ItemSource::Custom { name } => name,
        }
    }

    /// Flags the item as bought at `at`. Re-marking keeps it purchased and moves the
    /// timestamp to the latest call.
    pub fn mark_purchased(&mut self, at: DateTime<Utc>) {
        self.purchased_at = Some(at);
    }
}

/// Non-negative, at most two decimals and below 10^8; returned at scale 2.
fn validate_price(price: BigDecimal) -> Result<BigDecimal, ShoppingListError> {
    if price.is_negative() {
        return Err(ShoppingListError::NegativePrice);
    }
    let scaled = price.with_scale(PRICE_SCALE);
    if scaled != price {
        return Err(ShoppingListError::PriceTooPrecise);
    }
    if scaled >= BigDecimal::from(PRICE_LIMIT) {
        return Err(ShoppingListError::PriceTooLarge);
    }
    Ok(scaled)
}
