use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::orders::{CreateOrderRequest, OrderCreated},
    error::AppResult,
    extract::AppJson,
    middleware::auth::AuthCustomer,
    models::{Order, OrderLine, OrderShortDetail},
    response::ErrorBody,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/inCustomer", get(customer_orders))
        .route("/orders/{order_id}", get(get_order))
        .route(
            "/orders/shortDetail/{order_id}",
            get(short_detail).post(short_detail),
        )
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed from the cart", body = OrderCreated),
        (status = 400, description = "Cart is empty", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Unknown shipping or tax", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    customer: AuthCustomer,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let created = order_service::create_order(&state, &customer, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/orders/inCustomer",
    responses(
        (status = 200, description = "Orders of the current customer", body = Vec<Order>),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn customer_orders(
    State(state): State<AppState>,
    customer: AuthCustomer,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::customer_orders(&state, &customer).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Lines of the order", body = Vec<OrderLine>),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    customer: AuthCustomer,
    Path(order_id): Path<i32>,
) -> AppResult<Json<Vec<OrderLine>>> {
    let lines = order_service::order_lines(&state, &customer, order_id).await?;
    Ok(Json(lines))
}

#[utoipa::path(
    post,
    path = "/orders/shortDetail/{order_id}",
    params(
        ("order_id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order summary", body = OrderShortDetail),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
pub async fn short_detail(
    State(state): State<AppState>,
    customer: AuthCustomer,
    Path(order_id): Path<i32>,
) -> AppResult<Json<OrderShortDetail>> {
    let detail = order_service::short_detail(&state, &customer, order_id).await?;
    Ok(Json(detail))
}
