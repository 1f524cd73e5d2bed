use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::notification::use_cases::create::{
    CreateNotificationParams, CreateNotificationUseCase,
};
use business::domain::notification::use_cases::get_all::{
    GetAllNotificationsParams, GetAllNotificationsUseCase,
};
use business::domain::notification::use_cases::mark_sent::{
    MarkNotificationSentParams, MarkNotificationSentUseCase,
};
use business::domain::notification::use_cases::record_failure::{
    RecordNotificationFailureParams, RecordNotificationFailureUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::notification::dto::{
    CreateNotificationRequest, NotificationResponse, RecordNotificationFailureRequest,
};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct NotificationApi {
    create_use_case: Arc<dyn CreateNotificationUseCase>,
    get_all_use_case: Arc<dyn GetAllNotificationsUseCase>,
    mark_sent_use_case: Arc<dyn MarkNotificationSentUseCase>,
    record_failure_use_case: Arc<dyn RecordNotificationFailureUseCase>,
}

impl NotificationApi {
    pub fn new(
        create_use_case: Arc<dyn CreateNotificationUseCase>,
        get_all_use_case: Arc<dyn GetAllNotificationsUseCase>,
        mark_sent_use_case: Arc<dyn MarkNotificationSentUseCase>,
        record_failure_use_case: Arc<dyn RecordNotificationFailureUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            mark_sent_use_case,
            record_failure_use_case,
        }
    }
}

fn parse_id(raw: &str, message: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(message))
}

/// Notification API
///
/// Delivery log for reminders and list-ready messages.
#[OpenApi]
impl NotificationApi {
    /// List notifications
    ///
    /// Newest first.
    #[oai(path = "/notifications", method = "get", tag = "ApiTags::Notifications")]
    async fn get_all(&self, auth: BearerAuth) -> GetAllNotificationsResponse {
        match self
            .get_all_use_case
            .execute(GetAllNotificationsParams { user_id: auth.0 })
            .await
        {
            Ok(notifications) => GetAllNotificationsResponse::Ok(Json(
                notifications.into_iter().map(|n| n.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllNotificationsResponse::InternalError(json)
            }
        }
    }

    /// Create a notification
    #[oai(path = "/notifications", method = "post", tag = "ApiTags::Notifications")]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateNotificationRequest>,
    ) -> CreateNotificationResponse {
        let body = body.0;
        let shopping_list_id = match body.shopping_list_id.as_deref() {
            Some(raw) => match parse_id(raw, "notification.invalid_shopping_list_id") {
                Ok(id) => Some(id),
                Err(json) => return CreateNotificationResponse::BadRequest(json),
            },
            None => None,
        };

        let params = CreateNotificationParams {
            user_id: auth.0,
            shopping_list_id,
            notification_type: body.notification_type.into(),
            title: body.title,
            message: body.message,
        };

        match self.create_use_case.execute(params).await {
            Ok(notification) => CreateNotificationResponse::Created(Json(notification.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateNotificationResponse::BadRequest(json),
                    404 => CreateNotificationResponse::NotFound(json),
                    _ => CreateNotificationResponse::InternalError(json),
                }
            }
        }
    }

    /// Mark a notification as sent
    ///
    /// Also flags the linked shopping list as notified.
    #[oai(
        path = "/notifications/:id/sent",
        method = "post",
        tag = "ApiTags::Notifications"
    )]
    async fn mark_sent(&self, auth: BearerAuth, id: Path<String>) -> DeliveryResponse {
        let id = match parse_id(&id.0, "notification.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeliveryResponse::BadRequest(json),
        };

        let result = self
            .mark_sent_use_case
            .execute(MarkNotificationSentParams {
                id,
                user_id: auth.0,
            })
            .await;
        DeliveryResponse::from_result(result)
    }

    /// Record a delivery failure
    #[oai(
        path = "/notifications/:id/failure",
        method = "post",
        tag = "ApiTags::Notifications"
    )]
    async fn record_failure(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<RecordNotificationFailureRequest>,
    ) -> DeliveryResponse {
        let id = match parse_id(&id.0, "notification.invalid_id") {
            Ok(id) => id,
            Err(json) => return DeliveryResponse::BadRequest(json),
        };

        let result = self
            .record_failure_use_case
            .execute(RecordNotificationFailureParams {
                id,
                user_id: auth.0,
                error_message: body.0.error_message,
            })
            .await;
        DeliveryResponse::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllNotificationsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<NotificationResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateNotificationResponse {
    #[oai(status = 201)]
    Created(Json<NotificationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeliveryResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl DeliveryResponse {
    fn from_result<E: IntoErrorResponse>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => DeliveryResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeliveryResponse::BadRequest(json),
                    404 => DeliveryResponse::NotFound(json),
                    409 => DeliveryResponse::Conflict(json),
                    _ => DeliveryResponse::InternalError(json),
                }
            }
        }
    }
}
