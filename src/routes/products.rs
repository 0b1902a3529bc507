use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::products::PostReviewRequest,
    error::AppResult,
    extract::AppJson,
    middleware::auth::AuthCustomer,
    models::{Product, ProductSummary, Review, ReviewView},
    response::{ErrorBody, Paginated},
    routes::params::{DescriptionQuery, Pagination, SearchQuery},
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/search", get(search_products))
        .route("/products/{product_id}", get(get_product))
        .route("/products/inCategory/{category_id}", get(products_in_category))
        .route("/products/inDepartment/{department_id}", get(products_in_department))
        .route(
            "/products/{product_id}/reviews",
            get(list_reviews).post(post_review),
        )
}

#[utoipa::path(
    get,
    path = "/products",
    params(Pagination),
    responses(
        (status = 200, description = "Paginated products", body = Paginated<ProductSummary>)
    ),
    tag = "Products"
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<ProductSummary>>> {
    let page = product_service::list_products(&state, pagination).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/products/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Products whose name (or description) contains the term", body = Paginated<ProductSummary>),
        (status = 400, description = "Missing query_string", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Paginated<ProductSummary>>> {
    let page = product_service::search_products(&state, query).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        DescriptionQuery
    ),
    responses(
        (status = 200, description = "Single product", body = Product),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Query(query): Query<DescriptionQuery>,
) -> AppResult<Json<Product>> {
    let product =
        product_service::get_product(&state, product_id, query.description_length()).await?;
    Ok(Json(product))
}

#[utoipa::path(
    get,
    path = "/products/inCategory/{category_id}",
    params(
        ("category_id" = i32, Path, description = "Category ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "Paginated products of the category", body = Paginated<ProductSummary>)
    ),
    tag = "Products"
)]
pub async fn products_in_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<ProductSummary>>> {
    let page = product_service::products_in_category(&state, category_id, pagination).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/products/inDepartment/{department_id}",
    params(
        ("department_id" = i32, Path, description = "Department ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "Paginated products of the department", body = Paginated<ProductSummary>)
    ),
    tag = "Products"
)]
pub async fn products_in_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<ProductSummary>>> {
    let page = product_service::products_in_department(&state, department_id, pagination).await?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/products/{product_id}/reviews",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews of the product, newest first", body = Vec<ReviewView>)
    ),
    tag = "Products"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Vec<ReviewView>>> {
    let reviews = product_service::list_reviews(&state, product_id).await?;
    Ok(Json(reviews))
}

#[utoipa::path(
    post,
    path = "/products/{product_id}/reviews",
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = PostReviewRequest,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Empty review or rating outside 1..=5", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
pub async fn post_review(
    State(state): State<AppState>,
    customer: AuthCustomer,
    Path(product_id): Path<i32>,
    AppJson(payload): AppJson<PostReviewRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = product_service::post_review(&state, &customer, product_id, payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}
