use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::dish_service::DishService;
use crate::domain::dish::{Dish, DishPayload};
use crate::errors::AppError;
use crate::store::AppState;

use super::DataResponse;

// ── Request DTO ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DishRequest {
    #[serde(default)]
    pub data: Option<DishPayload>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /dishes
#[utoipa::path(
    post,
    path = "/dishes",
    request_body = DishRequest,
    responses(
        (status = 201, description = "Dish created", body = DataResponse<Dish>),
        (status = 400, description = "Payload failed validation"),
    ),
    tag = "dishes"
)]
pub async fn create_dish(
    state: web::Data<AppState>,
    body: web::Json<DishRequest>,
) -> Result<HttpResponse, AppError> {
    let dish = DishService::new(state.dishes.clone()).create(body.into_inner().data)?;
    Ok(HttpResponse::Created().json(DataResponse { data: dish }))
}

/// GET /dishes/{dishId}
#[utoipa::path(
    get,
    path = "/dishes/{dishId}",
    params(
        ("dishId" = String, Path, description = "Dish id"),
    ),
    responses(
        (status = 200, description = "Dish found", body = DataResponse<Dish>),
        (status = 404, description = "No dish with this id"),
    ),
    tag = "dishes"
)]
pub async fn get_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let dish = DishService::new(state.dishes.clone()).read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(DataResponse { data: dish }))
}

/// PUT /dishes/{dishId}
///
/// Responds with the stored dish merged with the validated payload. The
/// merge is not written back; the stored entry keeps its original fields.
#[utoipa::path(
    put,
    path = "/dishes/{dishId}",
    params(
        ("dishId" = String, Path, description = "Dish id"),
    ),
    request_body = DishRequest,
    responses(
        (status = 200, description = "Merged dish", body = DataResponse<Dish>),
        (status = 400, description = "Payload failed validation or id mismatch"),
        (status = 404, description = "No dish with this id"),
    ),
    tag = "dishes"
)]
pub async fn update_dish(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<DishRequest>,
) -> Result<HttpResponse, AppError> {
    let dish =
        DishService::new(state.dishes.clone()).update(&path.into_inner(), body.into_inner().data)?;
    Ok(HttpResponse::Ok().json(DataResponse { data: dish }))
}

/// GET /dishes
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "Every dish, in insertion order", body = DataResponse<Vec<Dish>>),
    ),
    tag = "dishes"
)]
pub async fn list_dishes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dishes = DishService::new(state.dishes.clone()).list();
    Ok(HttpResponse::Ok().json(DataResponse { data: dishes }))
}
