use crate::{
    dtos::order::{OrderQueryParams, OrderResponse, PaginatedOrdersResponse, PaginationMeta},
    error::ApiError,
    extractors::{CurrentUser, Params, Payload},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::order::OrderService;
use models::order::{OrderRequest, PageRequest};

/// List the caller's orders, newest first
#[utoipa::path(
    get,
    path = "/orders",
    params(OrderQueryParams),
    responses(
        (status = 200, description = "One page of orders", body = PaginatedOrdersResponse),
        (status = 400, description = "Invalid page number"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("jwt" = [])),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    user: CurrentUser,
    Params(params): Params<OrderQueryParams>,
) -> Result<Json<PaginatedOrdersResponse>, ApiError> {
    let page = PageRequest::orders(params.page)?;
    let (orders, total_items) = OrderService::list(&state.db, user.id(), page).await?;

    Ok(Json(PaginatedOrdersResponse {
        orders: orders.into_iter().map(OrderResponse::from).collect(),
        pagination: PaginationMeta::new(page.page, page.per_page, total_items),
    }))
}

/// Get one of the caller's orders
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "No such order for this user")
    ),
    security(("jwt" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = OrderService::get(&state.db, user.id(), id).await?;
    Ok(Json(order.into()))
}

/// Buy tickets; either every seat is booked or none is
#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderResponse),
        (status = 400, description = "Invalid ticket, seat out of range, or seat already taken"),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    security(("jwt" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    user: CurrentUser,
    Payload(request): Payload<OrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let order = OrderService::create(&state.db, user.id(), request.into_tickets()).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}
