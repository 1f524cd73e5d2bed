use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use business::domain::ingredient::use_cases::get_all::GetAllIngredientsUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::{CreateIngredientRequest, IngredientResponse};
use crate::api::security::BearerAuth;
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    create_use_case: Arc<dyn CreateIngredientUseCase>,
    get_all_use_case: Arc<dyn GetAllIngredientsUseCase>,
}

impl IngredientApi {
    pub fn new(
        create_use_case: Arc<dyn CreateIngredientUseCase>,
        get_all_use_case: Arc<dyn GetAllIngredientsUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
        }
    }
}

/// Ingredient catalog API
#[OpenApi]
impl IngredientApi {
    /// List ingredients
    ///
    /// Public catalog ordered by category, then name.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_all(&self) -> GetAllIngredientsResponse {
        match self.get_all_use_case.execute().await {
            Ok(ingredients) => GetAllIngredientsResponse::Ok(Json(
                ingredients.into_iter().map(|i| i.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllIngredientsResponse::InternalError(json)
            }
        }
    }

    /// Create an ingredient
    #[oai(path = "/ingredients", method = "post", tag = "ApiTags::Ingredients")]
    async fn create(
        &self,
        _auth: BearerAuth,
        body: Json<CreateIngredientRequest>,
    ) -> CreateIngredientResponse {
        let params = CreateIngredientParams {
            name: body.0.name,
            category: body.0.category,
            unit: body.0.unit,
        };

        match self.create_use_case.execute(params).await {
            Ok(ingredient) => CreateIngredientResponse::Created(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateIngredientResponse::BadRequest(json),
                    409 => CreateIngredientResponse::Conflict(json),
                    _ => CreateIngredientResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateIngredientResponse {
    #[oai(status = 201)]
    Created(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
