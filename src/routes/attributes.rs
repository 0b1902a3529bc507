use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Attribute, AttributeValue, ProductAttributeDetail},
    response::ErrorBody,
    services::attribute_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/attributes", get(list_attributes))
        .route("/attributes/{attribute_id}", get(get_attribute))
        .route("/attributes/values/{attribute_id}", get(attribute_values))
        .route("/attributes/inProduct/{product_id}", get(product_attributes))
}

#[utoipa::path(
    get,
    path = "/attributes",
    responses(
        (status = 200, description = "All attributes", body = Vec<Attribute>)
    ),
    tag = "Attributes"
)]
pub async fn list_attributes(State(state): State<AppState>) -> AppResult<Json<Vec<Attribute>>> {
    let attributes = attribute_service::list_attributes(&state).await?;
    Ok(Json(attributes))
}

#[utoipa::path(
    get,
    path = "/attributes/{attribute_id}",
    params(
        ("attribute_id" = i32, Path, description = "Attribute ID")
    ),
    responses(
        (status = 200, description = "Single attribute", body = Attribute),
        (status = 404, description = "Attribute not found", body = ErrorBody),
    ),
    tag = "Attributes"
)]
pub async fn get_attribute(
    State(state): State<AppState>,
    Path(attribute_id): Path<i32>,
) -> AppResult<Json<Attribute>> {
    let attribute = attribute_service::get_attribute(&state, attribute_id).await?;
    Ok(Json(attribute))
}

#[utoipa::path(
    get,
    path = "/attributes/values/{attribute_id}",
    params(
        ("attribute_id" = i32, Path, description = "Attribute ID")
    ),
    responses(
        (status = 200, description = "Values of the attribute", body = Vec<AttributeValue>)
    ),
    tag = "Attributes"
)]
pub async fn attribute_values(
    State(state): State<AppState>,
    Path(attribute_id): Path<i32>,
) -> AppResult<Json<Vec<AttributeValue>>> {
    let values = attribute_service::attribute_values(&state, attribute_id).await?;
    Ok(Json(values))
}

#[utoipa::path(
    get,
    path = "/attributes/inProduct/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Attribute values linked to the product", body = Vec<ProductAttributeDetail>)
    ),
    tag = "Attributes"
)]
pub async fn product_attributes(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Vec<ProductAttributeDetail>>> {
    let attributes = attribute_service::product_attributes(&state, product_id).await?;
    Ok(Json(attributes))
}
