use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::products::PostReviewRequest,
    entity::{
        product::Entity as Products,
        review::{ActiveModel as ReviewActive, Model as ReviewModel},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthCustomer,
    models::{Product, ProductSummary, Review, ReviewView},
    response::{Paginated, PaginationMeta},
    routes::params::{Pagination, SearchQuery},
    state::AppState,
};

const SUMMARY_COLUMNS: &str = "p.product_id, p.name, LEFT(p.description, $1) AS description, \
                               p.price, p.discounted_price, p.thumbnail";

pub async fn list_products(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<Paginated<ProductSummary>> {
    let (page, limit, offset) = pagination.normalize();
    let sql = format!(
        "SELECT {SUMMARY_COLUMNS} FROM product p ORDER BY p.product_id LIMIT $2 OFFSET $3"
    );
    let rows = sqlx::query_as::<_, ProductSummary>(&sql)
        .bind(pagination.description_length())
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.pool)
        .await?;

    let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM product")
        .fetch_one(&state.pool)
        .await?;

    Ok(Paginated::new(rows, PaginationMeta::new(page, limit, total.0)))
}

pub async fn search_products(
    state: &AppState,
    query: SearchQuery,
) -> AppResult<Paginated<ProductSummary>> {
    let term = query
        .query_string
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("query_string is required".into()))?;
    let pattern = like_pattern(term);
    let pagination = query.pagination();
    let (page, limit, offset) = pagination.normalize();

    let filter = if query.matches_description() {
        "p.name ILIKE $4 OR p.description ILIKE $4"
    } else {
        "p.name ILIKE $4"
    };

    let sql = format!(
        "SELECT {SUMMARY_COLUMNS} FROM product p WHERE {filter} \
         ORDER BY p.product_id LIMIT $2 OFFSET $3"
    );
    let rows = sqlx::query_as::<_, ProductSummary>(&sql)
        .bind(pagination.description_length())
        .bind(limit)
        .bind(offset)
        .bind(&pattern)
        .fetch_all(&state.pool)
        .await?;

    let count_sql = format!("SELECT COUNT(*) FROM product p WHERE {}", filter.replace("$4", "$1"));
    let total: (i64,) = sqlx::query_as(&count_sql)
        .bind(&pattern)
        .fetch_one(&state.pool)
        .await?;

    Ok(Paginated::new(rows, PaginationMeta::new(page, limit, total.0)))
}

pub async fn products_in_category(
    state: &AppState,
    category_id: i32,
    pagination: Pagination,
) -> AppResult<Paginated<ProductSummary>> {
    let (page, limit, offset) = pagination.normalize();
    let sql = format!(
        r#"
        SELECT {SUMMARY_COLUMNS}
        FROM product p
        JOIN product_category pc ON pc.product_id = p.product_id
        WHERE pc.category_id = $4
        ORDER BY p.product_id
        LIMIT $2 OFFSET $3
        "#
    );
    let rows = sqlx::query_as::<_, ProductSummary>(&sql)
        .bind(pagination.description_length())
        .bind(limit)
        .bind(offset)
        .bind(category_id)
        .fetch_all(&state.pool)
        .await?;

    let total: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM product_category WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&state.pool)
            .await?;

    Ok(Paginated::new(rows, PaginationMeta::new(page, limit, total.0)))
}

/// A product listed under several categories of the department appears once.
pub async fn products_in_department(
    state: &AppState,
    department_id: i32,
    pagination: Pagination,
) -> AppResult<Paginated<ProductSummary>> {
    const IN_DEPARTMENT: &str = r#"
        EXISTS (
            SELECT 1
            FROM product_category pc
            JOIN category c ON c.category_id = pc.category_id
            WHERE pc.product_id = p.product_id AND c.department_id = $DEPT
        )
    "#;

    let (page, limit, offset) = pagination.normalize();
    let sql = format!(
        "SELECT {SUMMARY_COLUMNS} FROM product p WHERE {} \
         ORDER BY p.product_id LIMIT $2 OFFSET $3",
        IN_DEPARTMENT.replace("$DEPT", "$4")
    );
    let rows = sqlx::query_as::<_, ProductSummary>(&sql)
        .bind(pagination.description_length())
        .bind(limit)
        .bind(offset)
        .bind(department_id)
        .fetch_all(&state.pool)
        .await?;

    let count_sql = format!(
        "SELECT COUNT(*) FROM product p WHERE {}",
        IN_DEPARTMENT.replace("$DEPT", "$1")
    );
    let total: (i64,) = sqlx::query_as(&count_sql)
        .bind(department_id)
        .fetch_one(&state.pool)
        .await?;

    Ok(Paginated::new(rows, PaginationMeta::new(page, limit, total.0)))
}

pub async fn get_product(
    state: &AppState,
    product_id: i32,
    description_length: i32,
) -> AppResult<Product> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT product_id, name, LEFT(description, $2) AS description, price,
               discounted_price, image, image_2, thumbnail, display
        FROM product
        WHERE product_id = $1
        "#,
    )
    .bind(product_id)
    .bind(description_length)
    .fetch_optional(&state.pool)
    .await?;

    product.ok_or_else(|| AppError::not_found("Product", product_id))
}

pub async fn list_reviews(state: &AppState, product_id: i32) -> AppResult<Vec<ReviewView>> {
    let reviews = sqlx::query_as::<_, ReviewView>(
        r#"
        SELECT c.name, r.review, r.rating, r.created_on
        FROM review r
        JOIN customer c ON c.customer_id = r.customer_id
        WHERE r.product_id = $1
        ORDER BY r.created_on DESC, r.review_id DESC
        "#,
    )
    .bind(product_id)
    .fetch_all(&state.pool)
    .await?;
    Ok(reviews)
}

pub async fn post_review(
    state: &AppState,
    customer: &AuthCustomer,
    product_id: i32,
    payload: PostReviewRequest,
) -> AppResult<Review> {
    let review = payload.review.trim();
    if review.is_empty() {
        return Err(AppError::BadRequest("review must not be empty".into()));
    }
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::BadRequest("rating must be between 1 and 5".into()));
    }

    if Products::find_by_id(product_id).one(&state.orm).await?.is_none() {
        return Err(AppError::not_found("Product", product_id));
    }

    let created = ReviewActive {
        review_id: NotSet,
        customer_id: Set(customer.customer_id),
        product_id: Set(product_id),
        review: Set(review.to_string()),
        rating: Set(payload.rating),
        created_on: NotSet,
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        customer_id = customer.customer_id,
        product_id,
        rating = payload.rating,
        "review posted"
    );

    Ok(review_from_entity(created))
}

/// Escapes LIKE wildcards so the term matches as a plain substring.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn review_from_entity(model: ReviewModel) -> Review {
    Review {
        review_id: model.review_id,
        customer_id: model.customer_id,
        product_id: model.product_id,
        review: model.review,
        rating: model.rating,
        created_on: model.created_on.with_timezone(&Utc),
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("arc"), "%arc%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
