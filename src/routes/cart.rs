use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post, put},
};

use crate::{
    dto::cart::{AddToCartRequest, CartId, UpdateCartItemRequest},
    error::AppResult,
    extract::AppJson,
    models::CartLine,
    response::ErrorBody,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shoppingcart/generateUniqueId", get(generate_unique_id))
        .route("/shoppingcart/add", post(add_to_cart))
        .route("/shoppingcart/{cart_id}", get(get_cart))
        .route("/shoppingcart/update/{item_id}", put(update_cart_item))
        .route("/shoppingcart/empty/{cart_id}", delete(empty_cart))
        .route("/shoppingcart/removeProduct/{item_id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/shoppingcart/generateUniqueId",
    responses(
        (status = 200, description = "Fresh cart id", body = CartId)
    ),
    tag = "Cart"
)]
pub async fn generate_unique_id() -> Json<CartId> {
    Json(cart_service::generate_cart_id())
}

#[utoipa::path(
    post,
    path = "/shoppingcart/add",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Cart after adding the product", body = Vec<CartLine>),
        (status = 400, description = "Bad cart id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddToCartRequest>,
) -> AppResult<Json<Vec<CartLine>>> {
    let cart = cart_service::add_to_cart(&state, payload).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    get,
    path = "/shoppingcart/{cart_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Lines in the cart", body = Vec<CartLine>)
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> AppResult<Json<Vec<CartLine>>> {
    let cart = cart_service::list_cart(&state, &cart_id).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    put,
    path = "/shoppingcart/update/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Cart line ID")
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Cart after the update", body = Vec<CartLine>),
        (status = 400, description = "Quantity not positive", body = ErrorBody),
        (status = 404, description = "Cart line not found", body = ErrorBody),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
    AppJson(payload): AppJson<UpdateCartItemRequest>,
) -> AppResult<Json<Vec<CartLine>>> {
    let cart = cart_service::update_item(&state, item_id, payload).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    delete,
    path = "/shoppingcart/empty/{cart_id}",
    params(
        ("cart_id" = String, Path, description = "Cart ID")
    ),
    responses(
        (status = 200, description = "Cart emptied", body = Vec<CartLine>)
    ),
    tag = "Cart"
)]
pub async fn empty_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> AppResult<Json<Vec<CartLine>>> {
    let cart = cart_service::empty_cart(&state, &cart_id).await?;
    Ok(Json(cart))
}

#[utoipa::path(
    delete,
    path = "/shoppingcart/removeProduct/{item_id}",
    params(
        ("item_id" = i32, Path, description = "Cart line ID")
    ),
    responses(
        (status = 200, description = "Line removed", body = serde_json::Value),
        (status = 404, description = "Cart line not found", body = ErrorBody),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    let body = cart_service::remove_item(&state, item_id).await?;
    Ok(Json(body))
}
