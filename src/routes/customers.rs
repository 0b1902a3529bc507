use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};

use crate::{
    dto::customers::{
        AuthenticatedCustomer, LoginRequest, RegisterRequest, UpdateAddressRequest,
        UpdateCreditCardRequest, UpdateProfileRequest,
    },
    error::AppResult,
    extract::AppJson,
    models::Customer,
    response::ErrorBody,
    services::customer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", post(register))
        .route("/customers/login", post(login))
        .route("/customers/{customer_id}", get(get_customer))
        .route("/customer", put(update_profile))
        .route("/customer/address", put(update_address))
        .route("/customer/creditCard", put(update_credit_card))
}

#[utoipa::path(
    post,
    path = "/customers",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Customer created", body = AuthenticatedCustomer),
        (status = 400, description = "Invalid input or email taken", body = ErrorBody),
    ),
    tag = "Customers"
)]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthenticatedCustomer>)> {
    let created = customer_service::register_customer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    post,
    path = "/customers/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthenticatedCustomer),
        (status = 401, description = "Incorrect email or password", body = ErrorBody),
    ),
    tag = "Customers"
)]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> AppResult<Json<AuthenticatedCustomer>> {
    let resp = customer_service::login_customer(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/customers/{customer_id}",
    params(
        ("customer_id" = i32, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer profile", body = Customer),
        (status = 404, description = "Customer not found", body = ErrorBody),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::get_customer(&state, customer_id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/customer",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile; absent phone numbers are cleared", body = Customer),
        (status = 404, description = "No customer with that email", body = ErrorBody),
    ),
    tag = "Customers"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::update_profile(&state, payload).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/customer/address",
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Updated address; absent fields are cleared", body = Customer),
        (status = 400, description = "shipping_region_id is not a number", body = ErrorBody),
        (status = 404, description = "No customer with that email", body = ErrorBody),
    ),
    tag = "Customers"
)]
pub async fn update_address(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateAddressRequest>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::update_address(&state, payload).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/customer/creditCard",
    request_body = UpdateCreditCardRequest,
    responses(
        (status = 200, description = "Updated credit card", body = Customer),
        (status = 400, description = "Invalid credit card", body = ErrorBody),
        (status = 404, description = "No customer with that email", body = ErrorBody),
    ),
    tag = "Customers"
)]
pub async fn update_credit_card(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UpdateCreditCardRequest>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::update_credit_card(&state, payload).await?;
    Ok(Json(customer))
}
