mod common;

use axum::http::StatusCode;
use serde_json::json;
use storefront_api::{app::build_app, middleware::auth::issue_token};

use common::{lazy_state, send, send_raw};

#[tokio::test]
async fn health_route_responds() {
    let app = build_app(lazy_state());
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unknown_path_uses_error_body() {
    let app = build_app(lazy_state());
    let (status, body) = send(&app, "GET", "/does/not/exist", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["status"], 404);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn generate_unique_id_returns_uuid() {
    let app = build_app(lazy_state());
    let (status, body) = send(&app, "GET", "/shoppingcart/generateUniqueId", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let cart_id = body["cart_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(cart_id).is_ok());
}

#[tokio::test]
async fn invalid_credit_card_is_rejected() {
    let app = build_app(lazy_state());
    for card in [json!("1234"), json!("4242424242424242"), json!(null)] {
        let (status, body) = send(
            &app,
            "PUT",
            "/customer/creditCard",
            Some(json!({ "email": "ada@example.com", "credit_card": card })),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "please enter a valid credit card");
    }
}

#[tokio::test]
async fn non_numeric_shipping_region_is_rejected() {
    let app = build_app(lazy_state());
    let (status, body) = send(
        &app,
        "PUT",
        "/customer/address",
        Some(json!({ "email": "ada@example.com", "shipping_region_id": "north" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
    assert_eq!(
        body["error"]["message"],
        "shipping_region_id needs to be a number"
    );
}

#[tokio::test]
async fn register_requires_name() {
    let app = build_app(lazy_state());
    let (status, _) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "  ", "email": "ada@example.com", "password": "secret" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_routes_require_token() {
    let app = build_app(lazy_state());

    let (status, body) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({ "cart_id": "abc", "shipping_id": 1, "tax_id": 1 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "unauthorized");

    let (status, _) = send(&app, "GET", "/orders/inCustomer", None, Some("Bearer not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/orders/1", None, Some("Token abc")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn review_rating_is_validated() {
    let state = lazy_state();
    let token = issue_token(&state.auth, 7).unwrap();
    let app = build_app(state);

    let (status, body) = send(
        &app,
        "POST",
        "/products/1/reviews",
        Some(json!({ "review": "Lovely shirt", "rating": 9 })),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "rating must be between 1 and 5");
}

#[tokio::test]
async fn search_requires_query_string() {
    let app = build_app(lazy_state());
    let (status, _) = send(&app, "GET", "/products/search?page=1", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cart_quantity_must_be_positive() {
    let app = build_app(lazy_state());
    let (status, _) = send(
        &app,
        "PUT",
        "/shoppingcart/update/1",
        Some(json!({ "quantity": 0 })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn charge_rejects_bad_amount() {
    let app = build_app(lazy_state());
    let (status, body) = send(
        &app,
        "POST",
        "/stripe/charge",
        Some(json!({
            "stripeToken": "tok_visa",
            "order_id": 1,
            "description": "T-shirts",
            "amount": 0
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "amount must be greater than 0");
}

#[tokio::test]
async fn bad_card_without_email_is_still_a_card_error() {
    let app = build_app(lazy_state());
    let (status, body) = send(
        &app,
        "PUT",
        "/customer/creditCard",
        Some(json!({ "credit_card": "abc" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "please enter a valid credit card");
}

#[tokio::test]
async fn bad_region_without_email_is_still_a_region_error() {
    let app = build_app(lazy_state());
    let (status, body) = send(
        &app,
        "PUT",
        "/customer/address",
        Some(json!({ "shipping_region_id": [1] })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "shipping_region_id needs to be a number"
    );
}

#[tokio::test]
async fn mistyped_json_field_uses_error_body() {
    let app = build_app(lazy_state());
    let (status, body) = send(
        &app,
        "PUT",
        "/shoppingcart/update/1",
        Some(json!({ "quantity": "two" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["status"], 400);
    assert_eq!(body["error"]["code"], "bad_request");
    assert!(body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn unparsable_json_uses_error_body() {
    let app = build_app(lazy_state());
    let (status, body) = send_raw(&app, "POST", "/customers", "{not json", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn non_json_content_type_uses_error_body() {
    let app = build_app(lazy_state());
    let (status, body) = send_raw(
        &app,
        "POST",
        "/stripe/charge",
        "amount=10",
        Some("application/x-www-form-urlencoded"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn missing_required_field_uses_error_body() {
    let app = build_app(lazy_state());
    let (status, body) = send(
        &app,
        "POST",
        "/shoppingcart/add",
        Some(json!({ "cart_id": "abc" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "bad_request");
}
