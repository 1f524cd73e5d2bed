use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::shopping_list::use_cases::add_item::{
    AddShoppingListItemParams, AddShoppingListItemUseCase,
};
use business::domain::shopping_list::use_cases::complete::{
    CompleteShoppingListParams, CompleteShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::delete_item::{
    DeleteShoppingListItemParams, DeleteShoppingListItemUseCase,
};
use business::domain::shopping_list::use_cases::get_all::{
    GetAllShoppingListsParams, GetAllShoppingListsUseCase,
};
use business::domain::shopping_list::use_cases::get_by_id::{
    GetShoppingListByIdParams, GetShoppingListByIdUseCase,
};
use business::domain::shopping_list::use_cases::mark_purchased::{
    MarkItemPurchasedParams, MarkItemPurchasedUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::BearerAuth;
use crate::api::shopping_list::dto::{
    AddShoppingListItemRequest, CreateShoppingListRequest, ShoppingListDetailsResponse,
    ShoppingListItemResponse, ShoppingListResponse,
};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    create_use_case: Arc<dyn CreateShoppingListUseCase>,
    get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
    get_by_id_use_case: Arc<dyn GetShoppingListByIdUseCase>,
    complete_use_case: Arc<dyn CompleteShoppingListUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
    add_item_use_case: Arc<dyn AddShoppingListItemUseCase>,
    mark_purchased_use_case: Arc<dyn MarkItemPurchasedUseCase>,
    delete_item_use_case: Arc<dyn DeleteShoppingListItemUseCase>,
}

impl ShoppingListApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateShoppingListUseCase>,
        get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
        get_by_id_use_case: Arc<dyn GetShoppingListByIdUseCase>,
        complete_use_case: Arc<dyn CompleteShoppingListUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
        add_item_use_case: Arc<dyn AddShoppingListItemUseCase>,
        mark_purchased_use_case: Arc<dyn MarkItemPurchasedUseCase>,
        delete_item_use_case: Arc<dyn DeleteShoppingListItemUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            complete_use_case,
            delete_use_case,
            add_item_use_case,
            mark_purchased_use_case,
            delete_item_use_case,
        }
    }
}

fn parse_id(raw: &str, message: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(raw).map_err(|_| ErrorResponse::validation(message))
}

fn parse_menu_ids(raw: Option<Vec<String>>) -> Result<Vec<Uuid>, Json<ErrorResponse>> {
    raw.unwrap_or_default()
        .iter()
        .map(|id| parse_id(id, "shopping_list.invalid_menu_id"))
        .collect()
}

fn parse_price(raw: Option<String>) -> Result<Option<BigDecimal>, Json<ErrorResponse>> {
    raw.map(|price| {
        BigDecimal::from_str(price.trim())
            .map_err(|_| ErrorResponse::validation("shopping_list.invalid_price"))
    })
    .transpose()
}

/// Both bounds or neither.
fn parse_generation_period(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Option<(NaiveDate, NaiveDate)>, Json<ErrorResponse>> {
    match (start, end) {
        (Some(start), Some(end)) => Ok(Some((start, end))),
        (None, None) => Ok(None),
        _ => Err(ErrorResponse::validation(
            "shopping_list.invalid_generation_period",
        )),
    }
}

/// Shopping list API
///
/// Lists, their items and purchase progress for the authenticated user.
#[OpenApi]
impl ShoppingListApi {
    /// List shopping lists
    ///
    /// Returns the caller's lists, newest target date first, each with
    /// `totalItems`, `completedItems` and `completionRate`.
    #[oai(
        path = "/shopping-lists",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_all(&self, auth: BearerAuth) -> GetAllShoppingListsResponse {
        match self
            .get_all_use_case
            .execute(GetAllShoppingListsParams { user_id: auth.0 })
            .await
        {
            Ok(lists) => GetAllShoppingListsResponse::Ok(Json(
                lists.into_iter().map(|l| l.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllShoppingListsResponse::InternalError(json)
            }
        }
    }

    /// Create a shopping list
    #[oai(
        path = "/shopping-lists",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn create(
        &self,
        auth: BearerAuth,
        body: Json<CreateShoppingListRequest>,
    ) -> CreateShoppingListResponse {
        let body = body.0;
        let source_menu_ids = match parse_menu_ids(body.source_menu_ids) {
            Ok(ids) => ids,
            Err(json) => return CreateShoppingListResponse::BadRequest(json),
        };
        let generation_period =
            match parse_generation_period(body.generation_period_start, body.generation_period_end)
            {
                Ok(period) => period,
                Err(json) => return CreateShoppingListResponse::BadRequest(json),
            };

        let params = CreateShoppingListParams {
            user_id: auth.0,
            name: body.name,
            target_date: body.target_date,
            notes: body.notes.unwrap_or_default(),
            source_menu_ids,
            is_auto_generated: body.is_auto_generated.unwrap_or(false),
            generation_period,
        };

        match self.create_use_case.execute(params).await {
            Ok(summary) => CreateShoppingListResponse::Created(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShoppingListResponse::BadRequest(json),
                    _ => CreateShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a shopping list
    ///
    /// Returns the list with its items ordered by category and position, plus
    /// purchase progress.
    #[oai(
        path = "/shopping-lists/:id",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_by_id(&self, auth: BearerAuth, id: Path<String>) -> GetShoppingListResponse {
        let id = match parse_id(&id.0, "shopping_list.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetShoppingListResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetShoppingListByIdParams {
                id,
                user_id: auth.0,
            })
            .await
        {
            Ok(details) => GetShoppingListResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShoppingListResponse::NotFound(json),
                    _ => GetShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Complete a shopping list
    #[oai(
        path = "/shopping-lists/:id/complete",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn complete(&self, auth: BearerAuth, id: Path<String>) -> NoContentResponse {
        let id = match parse_id(&id.0, "shopping_list.invalid_id") {
            Ok(id) => id,
            Err(json) => return NoContentResponse::BadRequest(json),
        };

        let result = self
            .complete_use_case
            .execute(CompleteShoppingListParams {
                id,
                user_id: auth.0,
            })
            .await;
        NoContentResponse::from_result(result)
    }

    /// Delete a shopping list
    ///
    /// Removes the list together with all of its items.
    #[oai(
        path = "/shopping-lists/:id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete(&self, auth: BearerAuth, id: Path<String>) -> NoContentResponse {
        let id = match parse_id(&id.0, "shopping_list.invalid_id") {
            Ok(id) => id,
            Err(json) => return NoContentResponse::BadRequest(json),
        };

        let result = self
            .delete_use_case
            .execute(DeleteShoppingListParams {
                id,
                user_id: auth.0,
            })
            .await;
        NoContentResponse::from_result(result)
    }

    /// Add an item to a shopping list
    ///
    /// Exactly one of `ingredientId` or `customName` must be given.
    #[oai(
        path = "/shopping-lists/:id/items",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn add_item(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<AddShoppingListItemRequest>,
    ) -> AddShoppingListItemResponse {
        let body = body.0;
        let shopping_list_id = match parse_id(&id.0, "shopping_list.invalid_id") {
            Ok(id) => id,
            Err(json) => return AddShoppingListItemResponse::BadRequest(json),
        };
        let ingredient_id = match body.ingredient_id.as_deref() {
            Some(raw) => match parse_id(raw, "shopping_list.invalid_ingredient_id") {
                Ok(id) => Some(id),
                Err(json) => return AddShoppingListItemResponse::BadRequest(json),
            },
            None => None,
        };
        let actual_price = match parse_price(body.actual_price) {
            Ok(price) => price,
            Err(json) => return AddShoppingListItemResponse::BadRequest(json),
        };

        let params = AddShoppingListItemParams {
            user_id: auth.0,
            shopping_list_id,
            ingredient_id,
            custom_name: body.custom_name,
            quantity: body.quantity,
            category: body.category.map(Into::into),
            priority: body.priority.map(Into::into),
            display_order: body.order,
            actual_price,
            notes: body.notes.unwrap_or_default(),
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddShoppingListItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddShoppingListItemResponse::BadRequest(json),
                    404 => AddShoppingListItemResponse::NotFound(json),
                    _ => AddShoppingListItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Mark an item as purchased
    ///
    /// Idempotent: repeating the call keeps the item purchased and moves
    /// `purchasedAt` to the latest call.
    #[oai(
        path = "/shopping-list-items/:id/purchase",
        method = "post",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn mark_purchased(&self, auth: BearerAuth, id: Path<String>) -> NoContentResponse {
        let id = match parse_id(&id.0, "shopping_list.invalid_item_id") {
            Ok(id) => id,
            Err(json) => return NoContentResponse::BadRequest(json),
        };

        let result = self
            .mark_purchased_use_case
            .execute(MarkItemPurchasedParams {
                id,
                user_id: auth.0,
            })
            .await;
        NoContentResponse::from_result(result)
    }

    /// Delete a shopping list item
    #[oai(
        path = "/shopping-list-items/:id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete_item(&self, auth: BearerAuth, id: Path<String>) -> NoContentResponse {
        let id = match parse_id(&id.0, "shopping_list.invalid_item_id") {
            Ok(id) => id,
            Err(json) => return NoContentResponse::BadRequest(json),
        };

        let result = self
            .delete_item_use_case
            .execute(DeleteShoppingListItemParams {
                id,
                user_id: auth.0,
            })
            .await;
        NoContentResponse::from_result(result)
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListDetailsResponse>),
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
pub enum AddShoppingListItemResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Commands that answer with an empty body.
#[derive(poem_openapi::ApiResponse)]
pub enum NoContentResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl NoContentResponse {
    fn from_result<E: IntoErrorResponse>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => NoContentResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => NoContentResponse::BadRequest(json),
                    404 => NoContentResponse::NotFound(json),
                    _ => NoContentResponse::InternalError(json),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shopping_list::errors::ShoppingListError;

    #[test]
    fn should_reject_malformed_id() {
        let err = parse_id("42", "shopping_list.invalid_id").unwrap_err();

        assert_eq!(err.0.name, "ValidationError");
        assert_eq!(err.0.message, "shopping_list.invalid_id");
    }

    #[test]
    fn should_parse_price_as_decimal() {
        let price = parse_price(Some(" 3.49 ".to_string())).unwrap().unwrap();

        assert_eq!(price, BigDecimal::from_str("3.49").unwrap());
        assert!(parse_price(None).unwrap().is_none());
        assert!(parse_price(Some("cheap".to_string())).is_err());
    }

    #[test]
    fn should_require_both_generation_bounds() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 10);

        assert!(parse_generation_period(day, day).unwrap().is_some());
        assert!(parse_generation_period(None, None).unwrap().is_none());
        assert!(parse_generation_period(day, None).is_err());
    }

    #[test]
    fn should_reject_any_malformed_menu_id() {
        let ids = Some(vec![Uuid::new_v4().to_string(), "menu-2".to_string()]);

        let err = parse_menu_ids(ids).unwrap_err();

        assert_eq!(err.0.message, "shopping_list.invalid_menu_id");
    }

    #[test]
    fn should_answer_no_content_on_success() {
        let response = NoContentResponse::from_result::<ShoppingListError>(Ok(()));

        assert!(matches!(response, NoContentResponse::NoContent));
    }

    #[test]
    fn should_answer_not_found_for_unknown_item() {
        let response = NoContentResponse::from_result(Err(ShoppingListError::ItemNotFound));

        assert!(matches!(response, NoContentResponse::NotFound(_)));
    }
}
