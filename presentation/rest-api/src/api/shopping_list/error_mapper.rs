use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            e if e.is_validation() => (StatusCode::BAD_REQUEST, "ValidationError"),
            ShoppingListError::NotFound
            | ShoppingListError::ItemNotFound
            | ShoppingListError::IngredientNotFound => (StatusCode::NOT_FOUND, "NotFound"),
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
