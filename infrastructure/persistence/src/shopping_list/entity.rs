use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_list::model::{GenerationPeriod, ShoppingList};

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub target_date: NaiveDate,
    pub source_menu_ids: Vec<Uuid>,
    pub is_auto_generated: bool,
    pub generation_period_start: Option<NaiveDate>,
    pub generation_period_end: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notification_sent_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.name,
            self.target_date,
            self.source_menu_ids,
            self.is_auto_generated,
            GenerationPeriod::from_columns(
                self.generation_period_start,
                self.generation_period_end,
            ),
            self.completed_at,
            self.notes,
            self.created_at,
            self.updated_at,
        )
        .with_notification_sent_at(self.notification_sent_at)
    }
}
