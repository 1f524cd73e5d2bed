use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};

use business::domain::notification::model::{NotificationType, ShoppingNotification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum NotificationTypeDto {
    Reminder,
    ListReady,
    WeeklyPrep,
}

impl From<NotificationTypeDto> for NotificationType {
    fn from(dto: NotificationTypeDto) -> Self {
        match dto {
            NotificationTypeDto::Reminder => NotificationType::Reminder,
            NotificationTypeDto::ListReady => NotificationType::ListReady,
            NotificationTypeDto::WeeklyPrep => NotificationType::WeeklyPrep,
        }
    }
}

impl From<NotificationType> for NotificationTypeDto {
    fn from(notification_type: NotificationType) -> Self {
        match notification_type {
            NotificationType::Reminder => NotificationTypeDto::Reminder,
            NotificationType::ListReady => NotificationTypeDto::ListReady,
            NotificationType::WeeklyPrep => NotificationTypeDto::WeeklyPrep,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// List the notification is about, if any
    #[oai(skip_serializing_if_is_none)]
    pub shopping_list_id: Option<String>,
    pub notification_type: NotificationTypeDto,
    /// At most 100 characters
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecordNotificationFailureRequest {
    /// Delivery error reported by the sender
    pub error_message: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: String,
    #[oai(skip_serializing_if_is_none)]
    pub shopping_list_id: Option<String>,
    pub notification_type: NotificationTypeDto,
    pub title: String,
    pub message: String,
    pub is_sent: bool,
    #[oai(skip_serializing_if_is_none)]
    pub sent_at: Option<DateTime<Utc>>,
    pub error_message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingNotification> for NotificationResponse {
    fn from(notification: ShoppingNotification) -> Self {
        Self {
            id: notification.id.to_string(),
            is_sent: notification.is_sent(),
            shopping_list_id: notification.shopping_list_id.map(|id| id.to_string()),
            notification_type: notification.notification_type.into(),
            title: notification.title,
            message: notification.message,
            sent_at: notification.sent_at,
            error_message: notification.error_message,
            created_at: notification.created_at,
        }
    }
}
