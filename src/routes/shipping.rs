use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Shipping, ShippingRegion},
    response::ErrorBody,
    services::shipping_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shipping/regions", get(list_regions))
        .route("/shipping/regions/{shipping_region_id}", get(shipping_in_region))
}

#[utoipa::path(
    get,
    path = "/shipping/regions",
    responses(
        (status = 200, description = "All shipping regions", body = Vec<ShippingRegion>)
    ),
    tag = "Shipping"
)]
pub async fn list_regions(State(state): State<AppState>) -> AppResult<Json<Vec<ShippingRegion>>> {
    let regions = shipping_service::list_regions(&state).await?;
    Ok(Json(regions))
}

#[utoipa::path(
    get,
    path = "/shipping/regions/{shipping_region_id}",
    params(
        ("shipping_region_id" = i32, Path, description = "Shipping region ID")
    ),
    responses(
        (status = 200, description = "Shipping options in the region", body = Vec<Shipping>),
        (status = 404, description = "Shipping region not found", body = ErrorBody),
    ),
    tag = "Shipping"
)]
pub async fn shipping_in_region(
    State(state): State<AppState>,
    Path(shipping_region_id): Path<i32>,
) -> AppResult<Json<Vec<Shipping>>> {
    let options = shipping_service::shipping_in_region(&state, shipping_region_id).await?;
    Ok(Json(options))
}
