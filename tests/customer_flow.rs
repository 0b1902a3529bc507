mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use storefront_api::app::build_app;

use common::{database_state, send};

#[tokio::test]
async fn customer_account_flow() -> anyhow::Result<()> {
    let Some(state) = database_state().await? else {
        return Ok(());
    };
    let app = build_app(state);

    // Register
    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "Ada Lovelace", "email": "Ada@Example.com", "password": "engine" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let customer_id = body["customer"]["customer_id"].as_i64().unwrap();
    assert!(customer_id > 0);
    assert_eq!(body["customer"]["email"], "ada@example.com");
    assert_eq!(body["customer"]["address_1"], Value::Null);
    assert_eq!(body["customer"]["credit_card"], Value::Null);
    assert_eq!(body["customer"]["shipping_region_id"], 1);
    assert!(body["customer"].get("password").is_none());
    assert!(body["accessToken"].as_str().unwrap().starts_with("Bearer "));

    let (status, body) = send(
        &app,
        "POST",
        "/customers",
        Some(json!({ "name": "Ada", "email": "ada@example.com", "password": "other" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "The email already exists");

    // Login
    let (status, body) = send(
        &app,
        "POST",
        "/customers/login",
        Some(json!({ "email": "ada@example.com", "password": "wrong" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "login_failure");

    let (status, body) = send(
        &app,
        "POST",
        "/customers/login",
        Some(json!({ "email": "ada@example.com", "password": "engine" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["customer"]["customer_id"], customer_id);

    // Profile: absent phones are cleared, absent name is kept
    let (status, body) = send(
        &app,
        "PUT",
        "/customer",
        Some(json!({ "email": "ada@example.com", "day_phone": "555-0100", "eve_phone": "555-0101" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["day_phone"], "555-0100");
    assert_eq!(body["mob_phone"], Value::Null);

    let (status, body) = send(
        &app,
        "PUT",
        "/customer",
        Some(json!({ "email": "ada@example.com", "name": "Countess", "mob_phone": "555-0102" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Countess");
    assert_eq!(body["day_phone"], Value::Null);
    assert_eq!(body["eve_phone"], Value::Null);
    assert_eq!(body["mob_phone"], "555-0102");

    let (status, _) = send(
        &app,
        "PUT",
        "/customer",
        Some(json!({ "email": "nobody@example.com" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Address
    let (status, body) = send(
        &app,
        "PUT",
        "/customer/address",
        Some(json!({
            "email": "ada@example.com",
            "address_1": "12 St James's Square",
            "city": "London",
            "postal_code": "SW1Y 4JH",
            "country": "UK",
            "shipping_region_id": "3"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "London");
    assert_eq!(body["address_2"], Value::Null);
    assert_eq!(body["shipping_region_id"], 3);

    // Credit card
    let (status, body) = send(
        &app,
        "PUT",
        "/customer/creditCard",
        Some(json!({ "email": "ada@example.com", "credit_card": "1234567890127890" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let masked = body["credit_card"].as_str().unwrap();
    assert!(masked.ends_with("7890"));
    assert!(!masked.contains("123456"));

    let (status, _) = send(
        &app,
        "PUT",
        "/customer/creditCard",
        Some(json!({ "email": "ada@example.com", "credit_card": "1234567890123456" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Simultaneous registrations with one email: exactly one wins
    let racer = json!({ "name": "Racer", "email": "race@example.com", "password": "pw" });
    let (first, second) = tokio::join!(
        send(&app, "POST", "/customers", Some(racer.clone()), None),
        send(&app, "POST", "/customers", Some(racer), None),
    );
    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);
    let loser = if first.0 == StatusCode::BAD_REQUEST { first.1 } else { second.1 };
    assert_eq!(loser["error"]["message"], "The email already exists");

    // Lookup
    let (status, body) = send(&app, "GET", &format!("/customers/{customer_id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "London");

    let (status, _) = send(&app, "GET", "/customers/999999", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
