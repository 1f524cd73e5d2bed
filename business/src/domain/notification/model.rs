use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::NotificationError;
use crate::domain::shared::value_objects::UserId;

const TITLE_MAX_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Reminder,
    ListReady,
    WeeklyPrep,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Reminder => write!(f, "reminder"),
            NotificationType::ListReady => write!(f, "list_ready"),
            NotificationType::WeeklyPrep => write!(f, "weekly_prep"),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reminder" => Ok(NotificationType::Reminder),
            "list_ready" => Ok(NotificationType::ListReady),
            "weekly_prep" => Ok(NotificationType::WeeklyPrep),
            _ => Err(format!("Invalid notification type: {}", s)),
        }
    }
}

/// Delivery log entry for a message sent to a user, optionally about one list.
/// `is_sent()` is derived from `sent_at`.
#[derive(Debug, Clone)]
pub struct ShoppingNotification {
    pub id: Uuid,
    pub user_id: UserId,
    pub shopping_list_id: Option<Uuid>,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub sent_at: Option<DateTime<Utc>>,
    pub error_message: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewNotificationProps {
    pub user_id: UserId,
    pub shopping_list_id: Option<Uuid>,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
}

impl ShoppingNotification {
    pub fn new(props: NewNotificationProps) -> Result<Self, NotificationError> {
        let title = props.title.trim().to_string();
        if title.is_empty() {
            return Err(NotificationError::TitleEmpty);
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(NotificationError::TitleTooLong);
        }
        if props.message.trim().is_empty() {
            return Err(NotificationError::MessageEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id: props.user_id,
            shopping_list_id: props.shopping_list_id,
            notification_type: props.notification_type,
            title,
            message: props.message,
            sent_at: None,
            error_message: String::new(),
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        shopping_list_id: Option<Uuid>,
        notification_type: NotificationType,
        title: String,
        message: String,
        sent_at: Option<DateTime<Utc>>,
        error_message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            shopping_list_id,
            notification_type,
            title,
            message,
            sent_at,
            error_message,
            created_at,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.sent_at.is_some()
    }

    /// Records delivery and clears any earlier failure.
    pub fn mark_sent(&mut self, at: DateTime<Utc>) {
        self.sent_at = Some(at);
        self.error_message.clear();
    }

    /// Keeps the latest delivery error. A delivered notification cannot fail afterwards.
    pub fn record_failure(&mut self, error_message: &str) -> Result<(), NotificationError> {
        if self.is_sent() {
            return Err(NotificationError::AlreadySent);
        }
        self.error_message = error_message.trim().to_string();
        Ok(())
    }
}
