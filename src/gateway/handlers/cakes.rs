//! Cake order handlers (create, list)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::{
    ApiResult, CakeListResponse, CreateCakeResponse, ListCakesQuery, ValidatedCakeOrder,
};

/// Create cake order
///
/// POST /api/cakes
#[utoipa::path(
    post,
    path = "/api/cakes",
    request_body(content = crate::gateway::types::CreateCakeOrder, description = "Cake order", content_type = "application/json"),
    responses(
        (status = 201, description = "Order stored", body = CreateCakeResponse),
        (status = 400, description = "Invalid size or description", body = crate::gateway::types::ErrorBody),
        (status = 422, description = "Malformed or incomplete body"),
        (status = 503, description = "Database not available", body = crate::gateway::types::ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_cake(
    State(state): State<Arc<AppState>>,
    ValidatedCakeOrder(order): ValidatedCakeOrder,
) -> ApiResult<(StatusCode, Json<CreateCakeResponse>)> {
    let id = state.cake_service().create_order(order).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCakeResponse { id: id.to_string() }),
    ))
}

/// List cake orders
///
/// GET /api/cakes?limit=N
#[utoipa::path(
    get,
    path = "/api/cakes",
    params(ListCakesQuery),
    responses(
        (status = 200, description = "Stored orders in submission order", body = CakeListResponse),
        (status = 400, description = "Invalid query"),
        (status = 503, description = "Database not available", body = crate::gateway::types::ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn list_cakes(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListCakesQuery>, QueryRejection>,
) -> ApiResult<Json<CakeListResponse>> {
    let Query(query) = query?;
    let items = state.cake_service().list_orders(query.limit).await?;

    Ok(Json(CakeListResponse { items }))
}
