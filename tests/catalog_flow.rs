mod common;

use axum::http::StatusCode;
use storefront_api::{
    app::build_app,
    error::AppError,
    routes::params::{Pagination, SearchQuery},
    services::{attribute_service, catalog_service, product_service},
};

use common::{database_state, send};

async fn insert_id(pool: &sqlx::PgPool, sql: &str, binds: &[&str]) -> anyhow::Result<i32> {
    let mut query = sqlx::query_as::<_, (i32,)>(sql);
    for bind in binds {
        query = query.bind(*bind);
    }
    Ok(query.fetch_one(pool).await?.0)
}

#[tokio::test]
async fn catalog_browsing_flow() -> anyhow::Result<()> {
    let Some(state) = database_state().await? else {
        return Ok(());
    };
    let pool = &state.pool;

    let regional = insert_id(
        pool,
        "INSERT INTO department (name, description) VALUES ($1, $2) RETURNING department_id",
        &["Regional", "National symbols"],
    )
    .await?;
    let nature = insert_id(
        pool,
        "INSERT INTO department (name, description) VALUES ($1, $2) RETURNING department_id",
        &["Nature", "Animals and flowers"],
    )
    .await?;

    let mut category_ids = Vec::new();
    for (department_id, name) in [(regional, "French"), (regional, "Italian"), (nature, "Animal")] {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO category (department_id, name) VALUES ($1, $2) RETURNING category_id",
        )
        .bind(department_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        category_ids.push(id);
    }
    let (french, italian, animal) = (category_ids[0], category_ids[1], category_ids[2]);

    // 25 regional shirts, the first also listed as Italian, plus 3 animal shirts.
    let mut product_ids = Vec::new();
    for i in 0..28 {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO product (name, description, price, discounted_price) \
             VALUES ($1, $2, $3, 0) RETURNING product_id",
        )
        .bind(format!("Stamp Shirt {i:02}"))
        .bind(format!("A long description for stamp shirt number {i}"))
        .bind(1_500_i64 + i64::from(i))
        .fetch_one(pool)
        .await?;
        let category_id = if i < 25 { french } else { animal };
        sqlx::query("INSERT INTO product_category (product_id, category_id) VALUES ($1, $2)")
            .bind(id)
            .bind(category_id)
            .execute(pool)
            .await?;
        product_ids.push(id);
    }
    sqlx::query("INSERT INTO product_category (product_id, category_id) VALUES ($1, $2)")
        .bind(product_ids[0])
        .bind(italian)
        .execute(pool)
        .await?;

    let size = insert_id(
        pool,
        "INSERT INTO attribute (name) VALUES ($1) RETURNING attribute_id",
        &["Size"],
    )
    .await?;
    let color = insert_id(
        pool,
        "INSERT INTO attribute (name) VALUES ($1) RETURNING attribute_id",
        &["Color"],
    )
    .await?;
    let mut value_ids = Vec::new();
    for (attribute_id, value) in [(size, "S"), (size, "M"), (color, "Red")] {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO attribute_value (attribute_id, value) VALUES ($1, $2) \
             RETURNING attribute_value_id",
        )
        .bind(attribute_id)
        .bind(value)
        .fetch_one(pool)
        .await?;
        value_ids.push(id);
    }
    for value_id in [value_ids[0], value_ids[2]] {
        sqlx::query(
            "INSERT INTO product_attribute (product_id, attribute_value_id) VALUES ($1, $2)",
        )
        .bind(product_ids[0])
        .bind(value_id)
        .execute(pool)
        .await?;
    }

    // Attributes
    let values = attribute_service::attribute_values(&state, size).await?;
    assert_eq!(values.len(), 2);
    assert!(values.iter().all(|v| v.attribute_id == size));

    let details = attribute_service::product_attributes(&state, product_ids[0]).await?;
    assert_eq!(details.len(), 2);
    assert!(details.iter().any(|d| d.attribute_name == "Color" && d.attribute_value == "Red"));

    assert!(matches!(
        attribute_service::get_attribute(&state, 9_999).await,
        Err(AppError::NotFound(_))
    ));

    // Departments and categories
    assert_eq!(catalog_service::list_departments(&state).await?.len(), 2);
    assert!(matches!(
        catalog_service::get_department(&state, 9_999).await,
        Err(AppError::NotFound(_))
    ));
    let in_regional = catalog_service::categories_in_department(&state, regional).await?;
    assert_eq!(in_regional.rows.len(), 2);
    let of_first = catalog_service::categories_in_product(&state, product_ids[0]).await?;
    assert_eq!(of_first.len(), 2);
    assert!(of_first.iter().all(|c| c.department_id == regional));

    // Pagination
    let page = product_service::list_products(
        &state,
        Pagination {
            page: Some(3),
            limit: Some(10),
            description_length: Some(5),
        },
    )
    .await?;
    assert_eq!(page.pagination_meta.total_records, 28);
    assert_eq!(page.pagination_meta.total_pages, 3);
    assert_eq!(page.rows.len(), 8);
    assert!(page.rows.iter().all(|p| p.description.chars().count() <= 5));

    let in_department = product_service::products_in_department(
        &state,
        regional,
        Pagination {
            page: Some(1),
            limit: Some(100),
            description_length: None,
        },
    )
    .await?;
    assert_eq!(in_department.pagination_meta.total_records, 25);
    assert_eq!(in_department.rows.len(), 25);

    let in_animal =
        product_service::products_in_category(&state, animal, Pagination::default()).await?;
    assert_eq!(in_animal.rows.len(), 3);

    // Search
    let found = product_service::search_products(
        &state,
        SearchQuery {
            query_string: Some("shirt 2".into()),
            all_words: None,
            page: None,
            limit: None,
            description_length: None,
        },
    )
    .await?;
    // Stamp Shirt 20 to 27
    assert_eq!(found.pagination_meta.total_records, 8);

    let by_description = product_service::search_products(
        &state,
        SearchQuery {
            query_string: Some("number 27".into()),
            all_words: Some("on".into()),
            page: None,
            limit: None,
            description_length: None,
        },
    )
    .await?;
    assert_eq!(by_description.rows.len(), 1);

    // Over HTTP
    let app = build_app(state.clone());
    let uri = format!("/products/inDepartment/{regional}?limit=10");
    let (status, body) = send(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paginationMeta"]["totalRecords"], 25);
    assert_eq!(body["paginationMeta"]["totalPages"], 3);
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(10));

    let uri = format!("/categories/inDepartment/{nature}");
    let (status, body) = send(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"][0]["name"], "Animal");

    let (status, body) = send(
        &app,
        "GET",
        "/products?page=9223372036854775807&limit=100",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paginationMeta"]["currentPage"], i64::MAX);
    assert_eq!(body["paginationMeta"]["totalRecords"], 28);
    assert_eq!(body["rows"].as_array().map(Vec::len), Some(0));

    for length in ["0", "-3"] {
        let uri = format!("/products/inCategory/{animal}?description_length={length}");
        let (status, body) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row["description"] == ""));

        let uri = format!("/products/{}?description_length={length}", product_ids[0]);
        let (status, body) = send(&app, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["description"], "");
    }

    let (status, body) = send(&app, "GET", "/products/999999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    Ok(())
}
