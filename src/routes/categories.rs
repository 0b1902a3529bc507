use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::{Category, CategoryBrief},
    response::{ErrorBody, Rows},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{category_id}", get(get_category))
        .route("/categories/inProduct/{product_id}", get(categories_in_product))
        .route(
            "/categories/inDepartment/{department_id}",
            get(categories_in_department),
        )
}

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories", body = Rows<Category>)
    ),
    tag = "Categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Rows<Category>>> {
    let categories = catalog_service::list_categories(&state).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Single category", body = Category),
        (status = 404, description = "Category not found", body = ErrorBody),
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = catalog_service::get_category(&state, category_id).await?;
    Ok(Json(category))
}

#[utoipa::path(
    get,
    path = "/categories/inProduct/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Categories the product belongs to", body = Vec<CategoryBrief>)
    ),
    tag = "Categories"
)]
pub async fn categories_in_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Vec<CategoryBrief>>> {
    let categories = catalog_service::categories_in_product(&state, product_id).await?;
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/categories/inDepartment/{department_id}",
    params(
        ("department_id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Categories of the department", body = Rows<Category>)
    ),
    tag = "Categories"
)]
pub async fn categories_in_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
) -> AppResult<Json<Rows<Category>>> {
    let categories = catalog_service::categories_in_department(&state, department_id).await?;
    Ok(Json(categories))
}
