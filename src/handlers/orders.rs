use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::order::{Order, OrderPayload};
use crate::errors::AppError;
use crate::store::AppState;

use super::DataResponse;

// ── Request DTO ──────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct OrderRequest {
    #[serde(default)]
    pub data: Option<OrderPayload>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = DataResponse<Order>),
        (status = 400, description = "Payload failed validation"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order = OrderService::new(state.orders.clone()).create(body.into_inner().data)?;
    Ok(HttpResponse::Created().json(DataResponse { data: order }))
}

/// GET /orders/{orderId}
#[utoipa::path(
    get,
    path = "/orders/{orderId}",
    params(
        ("orderId" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = DataResponse<Order>),
        (status = 404, description = "No order with this id"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = OrderService::new(state.orders.clone()).read(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(DataResponse { data: order }))
}

/// PUT /orders/{orderId}
///
/// Responds with the stored order merged with the validated payload, after
/// the id-match and status gates clear. The merge is not written back; the
/// stored entry keeps its original fields.
#[utoipa::path(
    put,
    path = "/orders/{orderId}",
    params(
        ("orderId" = String, Path, description = "Order id"),
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Merged order", body = DataResponse<Order>),
        (status = 400, description = "Validation, id-match, or status gate failure"),
        (status = 404, description = "No order with this id"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<OrderRequest>,
) -> Result<HttpResponse, AppError> {
    let order =
        OrderService::new(state.orders.clone()).update(&path.into_inner(), body.into_inner().data)?;
    Ok(HttpResponse::Ok().json(DataResponse { data: order }))
}

/// DELETE /orders/{orderId}
///
/// Only pending orders may be deleted; anything else is a 400, not a 404.
#[utoipa::path(
    delete,
    path = "/orders/{orderId}",
    params(
        ("orderId" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending"),
        (status = 404, description = "No order with this id"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    OrderService::new(state.orders.clone()).destroy(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Every order, in insertion order", body = DataResponse<Vec<Order>>),
    ),
    tag = "orders"
)]
pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let orders = OrderService::new(state.orders.clone()).list();
    Ok(HttpResponse::Ok().json(DataResponse { data: orders }))
}
