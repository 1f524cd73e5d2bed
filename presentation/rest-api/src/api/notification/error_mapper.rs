use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::notification::errors::NotificationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for NotificationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            e if e.is_validation() => (StatusCode::BAD_REQUEST, "ValidationError"),
            NotificationError::NotFound | NotificationError::ShoppingListNotFound => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            NotificationError::AlreadySent => (StatusCode::CONFLICT, "Conflict"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
