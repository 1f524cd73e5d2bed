use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};

use business::domain::shopping_list::aggregator::{
    ShoppingListDetails, ShoppingListStats, ShoppingListSummary,
};
use business::domain::shopping_list::item::ShoppingListItem;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::value_objects::{ItemCategory, ItemPriority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum ItemCategoryDto {
    Vegetables,
    Fruits,
    Meat,
    Fish,
    Dairy,
    Grains,
    Seasonings,
    Beverages,
    Snacks,
    Frozen,
    Others,
}

impl From<ItemCategoryDto> for ItemCategory {
    fn from(dto: ItemCategoryDto) -> Self {
        match dto {
            ItemCategoryDto::Vegetables => ItemCategory::Vegetables,
            ItemCategoryDto::Fruits => ItemCategory::Fruits,
            ItemCategoryDto::Meat => ItemCategory::Meat,
            ItemCategoryDto::Fish => ItemCategory::Fish,
            ItemCategoryDto::Dairy => ItemCategory::Dairy,
            ItemCategoryDto::Grains => ItemCategory::Grains,
            ItemCategoryDto::Seasonings => ItemCategory::Seasonings,
            ItemCategoryDto::Beverages => ItemCategory::Beverages,
            ItemCategoryDto::Snacks => ItemCategory::Snacks,
            ItemCategoryDto::Frozen => ItemCategory::Frozen,
            ItemCategoryDto::Others => ItemCategory::Others,
        }
    }
}

impl From<ItemCategory> for ItemCategoryDto {
    fn from(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Vegetables => ItemCategoryDto::Vegetables,
            ItemCategory::Fruits => ItemCategoryDto::Fruits,
            ItemCategory::Meat => ItemCategoryDto::Meat,
            ItemCategory::Fish => ItemCategoryDto::Fish,
            ItemCategory::Dairy => ItemCategoryDto::Dairy,
            ItemCategory::Grains => ItemCategoryDto::Grains,
            ItemCategory::Seasonings => ItemCategoryDto::Seasonings,
            ItemCategory::Beverages => ItemCategoryDto::Beverages,
            ItemCategory::Snacks => ItemCategoryDto::Snacks,
            ItemCategory::Frozen => ItemCategoryDto::Frozen,
            ItemCategory::Others => ItemCategoryDto::Others,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum ItemPriorityDto {
    High,
    Medium,
    Low,
}

impl From<ItemPriorityDto> for ItemPriority {
    fn from(dto: ItemPriorityDto) -> Self {
        match dto {
            ItemPriorityDto::High => ItemPriority::High,
            ItemPriorityDto::Medium => ItemPriority::Medium,
            ItemPriorityDto::Low => ItemPriority::Low,
        }
    }
}

impl From<ItemPriority> for ItemPriorityDto {
    fn from(priority: ItemPriority) -> Self {
        match priority {
            ItemPriority::High => ItemPriorityDto::High,
            ItemPriority::Medium => ItemPriorityDto::Medium,
            ItemPriority::Low => ItemPriorityDto::Low,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateShoppingListRequest {
    /// List name (1 to 100 characters)
    pub name: String,
    /// Day the shopping is planned for
    pub target_date: NaiveDate,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    /// Menus the list was derived from
    #[oai(skip_serializing_if_is_none)]
    pub source_menu_ids: Option<Vec<String>>,
    #[oai(skip_serializing_if_is_none)]
    pub is_auto_generated: Option<bool>,
    /// Start of the planning window; requires `generationPeriodEnd`
    #[oai(skip_serializing_if_is_none)]
    pub generation_period_start: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub generation_period_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddShoppingListItemRequest {
    /// Catalog ingredient; mutually exclusive with `customName`
    #[oai(skip_serializing_if_is_none)]
    pub ingredient_id: Option<String>,
    /// Free-text name; mutually exclusive with `ingredientId`
    #[oai(skip_serializing_if_is_none)]
    pub custom_name: Option<String>,
    /// Free-form quantity, e.g. "500 g"
    pub quantity: String,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<ItemCategoryDto>,
    #[oai(skip_serializing_if_is_none)]
    pub priority: Option<ItemPriorityDto>,
    #[oai(skip_serializing_if_is_none)]
    pub order: Option<u32>,
    /// Decimal price as a string, e.g. "3.49"
    #[oai(skip_serializing_if_is_none)]
    pub actual_price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    pub id: String,
    pub name: String,
    pub target_date: NaiveDate,
    pub source_menu_ids: Vec<String>,
    pub is_auto_generated: bool,
    #[oai(skip_serializing_if_is_none)]
    pub generation_period_start: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub generation_period_end: Option<NaiveDate>,
    pub is_completed: bool,
    #[oai(skip_serializing_if_is_none)]
    pub completed_at: Option<DateTime<Utc>>,
    pub is_notified: bool,
    #[oai(skip_serializing_if_is_none)]
    pub notification_sent_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_items: u64,
    pub completed_items: u64,
    /// Percentage of purchased items, one decimal place
    pub completion_rate: f64,
}

impl ShoppingListResponse {
    fn build(list: ShoppingList, stats: ShoppingListStats) -> Self {
        let period = list.generation_period;
        Self {
            id: list.id.to_string(),
            is_completed: list.completed_at.is_some(),
            name: list.name,
            target_date: list.target_date,
            source_menu_ids: list.source_menu_ids.iter().map(|id| id.to_string()).collect(),
            is_auto_generated: list.is_auto_generated,
            generation_period_start: period.map(|p| p.start),
            generation_period_end: period.map(|p| p.end),
            completed_at: list.completed_at,
            is_notified: list.notification_sent_at.is_some(),
            notification_sent_at: list.notification_sent_at,
            notes: list.notes,
            created_at: list.created_at,
            updated_at: list.updated_at,
            total_items: stats.total_items as u64,
            completed_items: stats.completed_items as u64,
            completion_rate: stats.completion_rate,
        }
    }
}

impl From<ShoppingListSummary> for ShoppingListResponse {
    fn from(summary: ShoppingListSummary) -> Self {
        Self::build(summary.list, summary.stats)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListItemResponse {
    pub id: String,
    pub shopping_list_id: String,
    #[oai(skip_serializing_if_is_none)]
    pub ingredient_id: Option<String>,
    /// Ingredient name for catalog items, the custom name otherwise
    pub display_name: String,
    pub quantity: String,
    pub category: ItemCategoryDto,
    pub is_purchased: bool,
    #[oai(skip_serializing_if_is_none)]
    pub purchased_at: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub actual_price: Option<String>,
    pub order: u32,
    pub priority: ItemPriorityDto,
    pub notes: String,
}

impl From<ShoppingListItem> for ShoppingListItemResponse {
    fn from(item: ShoppingListItem) -> Self {
        Self {
            id: item.id.to_string(),
            shopping_list_id: item.shopping_list_id.to_string(),
            ingredient_id: item.source.ingredient_id().map(|id| id.to_string()),
            display_name: item.display_name().to_string(),
            is_purchased: item.is_purchased(),
            quantity: item.quantity,
            category: item.category.into(),
            purchased_at: item.purchased_at,
            actual_price: item.actual_price.map(|price| price.to_string()),
            order: item.display_order,
            priority: item.priority.into(),
            notes: item.notes,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListDetailsResponse {
    #[oai(flatten)]
    pub list: ShoppingListResponse,
    pub items: Vec<ShoppingListItemResponse>,
}

impl From<ShoppingListDetails> for ShoppingListDetailsResponse {
    fn from(details: ShoppingListDetails) -> Self {
        Self {
            list: ShoppingListResponse::build(details.list, details.stats),
            items: details.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
