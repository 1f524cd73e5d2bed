use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::ShoppingListError;
use crate::domain::shared::value_objects::UserId;

const NAME_MAX_LEN: usize = 100;

/// Inclusive date range a generated list was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl GenerationPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ShoppingListError> {
        if start > end {
            return Err(ShoppingListError::InvalidGenerationPeriod);
        }
        Ok(Self { start, end })
    }

    /// Rebuilds a period from its two nullable columns; a half-filled pair yields `None`.
    pub fn from_columns(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self { start, end }),
            _ => None,
        }
    }
}

/// A user's shopping list. Completion is one-way: `completed_at` is only ever set.
#[derive(Debug, Clone)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: String,
    pub target_date: NaiveDate,
    pub source_menu_ids: Vec<Uuid>,
    pub is_auto_generated: bool,
    pub generation_period: Option<GenerationPeriod>,
    pub completed_at: Option<DateTime<Utc>>,
    pub notification_sent_at: Option<DateTime<Utc>>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewShoppingListProps {
    pub user_id: UserId,
    pub name: String,
    pub target_date: NaiveDate,
    pub notes: String,
    pub source_menu_ids: Vec<Uuid>,
    pub is_auto_generated: bool,
    pub generation_period: Option<GenerationPeriod>,
}

impl ShoppingList {
    pub fn new(props: NewShoppingListProps) -> Result<Self, ShoppingListError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(ShoppingListError::NameTooLong);
        }

        let mut source_menu_ids = props.source_menu_ids;
        source_menu_ids.sort();
        source_menu_ids.dedup();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            name,
            target_date: props.target_date,
            source_menu_ids,
            is_auto_generated: props.is_auto_generated,
            generation_period: props.generation_period,
            completed_at: None,
            notification_sent_at: None,
            notes: props.notes,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        name: String,
        target_date: NaiveDate,
        source_menu_ids: Vec<Uuid>,
        is_auto_generated: bool,
        generation_period: Option<GenerationPeriod>,
        completed_at: Option<DateTime<Utc>>,
        notes: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            target_date,
            source_menu_ids,
            is_auto_generated,
            generation_period,
            completed_at,
            notification_sent_at: None,
            notes,
            created_at,
            updated_at,
        }
    }

    /// Restores the stored notification timestamp on a rebuilt list.
    pub fn with_notification_sent_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.notification_sent_at = at;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Marks the list as done. Calling it again refreshes `completed_at`.
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
        self.updated_at = at;
    }

    pub fn is_notified(&self) -> bool {
        self.notification_sent_at.is_some()
    }

    /// Records that a notification about this list reached the user.
    pub fn mark_notified(&mut self, at: DateTime<Utc>) {
        self.notification_sent_at = Some(at);
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn props(name: &str) -> NewShoppingListProps {
        NewShoppingListProps {
            user_id: UserId::new("test-user-id"),
            name: name.to_string(),
            target_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            notes: String::new(),
            source_menu_ids: vec![],
            is_auto_generated: false,
            generation_period: None,
        }
    }

    #[test]
    fn should_create_incomplete_list() {
        let list = ShoppingList::new(props("Wednesday groceries")).unwrap();

        assert_eq!(list.name, "Wednesday groceries");
        assert!(!list.is_completed());
        assert!(list.completed_at.is_none());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = ShoppingList::new(props("  "));
        assert!(matches!(result.unwrap_err(), ShoppingListError::NameEmpty));
    }

    #[test]
    fn should_reject_name_over_limit() {
        let result = ShoppingList::new(props(&"a".repeat(101)));
        assert!(matches!(result.unwrap_err(), ShoppingListError::NameTooLong));
    }

    #[test]
    fn should_deduplicate_source_menus() {
        let menu = Uuid::new_v4();
        let mut p = props("Week 24");
        p.source_menu_ids = vec![menu, menu];

        let list = ShoppingList::new(p).unwrap();

        assert_eq!(list.source_menu_ids, vec![menu]);
    }

    #[test]
    fn should_set_completed_at_together_with_flag() {
        let mut list = ShoppingList::new(props("Weekend")).unwrap();
        let first = Utc::now();

        list.complete(first);
        assert!(list.is_completed());
        assert_eq!(list.completed_at, Some(first));

        let second = first + Duration::minutes(5);
        list.complete(second);
        assert!(list.is_completed());
        assert_eq!(list.completed_at, Some(second));
    }

    #[test]
    fn should_start_unnotified_and_record_notification() {
        let mut list = ShoppingList::new(props("Saturday market")).unwrap();
        assert!(!list.is_notified());

        let at = Utc::now();
        list.mark_notified(at);

        assert!(list.is_notified());
        assert_eq!(list.notification_sent_at, Some(at));
        assert_eq!(list.updated_at, at);
    }

    #[test]
    fn should_restore_notification_timestamp_from_storage() {
        let at = Utc::now();
        let list = ShoppingList::new(props("Sunday"))
            .unwrap()
            .with_notification_sent_at(Some(at));

        assert!(list.is_notified());
    }

    #[test]
    fn should_reject_inverted_generation_period() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

        let result = GenerationPeriod::new(start, end);

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListError::InvalidGenerationPeriod
        ));
    }

    #[test]
    fn should_accept_single_day_period() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(GenerationPeriod::new(day, day).is_ok());
    }

    #[test]
    fn should_drop_half_filled_period_columns() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert!(GenerationPeriod::from_columns(day, None).is_none());
        assert!(GenerationPeriod::from_columns(day, day).is_some());
    }
}
