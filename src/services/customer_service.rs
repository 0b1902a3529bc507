use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, SqlErr};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::customers::{
        AuthenticatedCustomer, LoginRequest, RegisterRequest, UpdateAddressRequest,
        UpdateCreditCardRequest, UpdateProfileRequest,
    },
    entity::customer::{
        ActiveModel as CustomerActive, Column as CustomerCol, Entity as Customers,
        Model as CustomerModel,
    },
    error::{AppError, AppResult},
    middleware::auth::issue_token,
    models::{Customer, mask_credit_card},
    state::AppState,
    validation::{parse_credit_card, parse_shipping_region_id},
};

const DEFAULT_SHIPPING_REGION_ID: i32 = 1;
const EMAIL_TAKEN: &str = "The email already exists";

pub async fn register_customer(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<AuthenticatedCustomer> {
    let RegisterRequest {
        name,
        email,
        password,
    } = payload;
    let name = name.trim().to_string();
    let email = email.trim().to_lowercase();

    if name.is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    if !email.contains('@') {
        return Err(AppError::BadRequest("email is invalid".into()));
    }
    if password.is_empty() {
        return Err(AppError::BadRequest("password is required".into()));
    }

    let exist = Customers::find()
        .filter(CustomerCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?;
    if exist.is_some() {
        return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
    }

    let customer = CustomerActive {
        customer_id: NotSet,
        name: Set(name),
        email: Set(email),
        password: Set(hash_password(&password)?),
        credit_card: Set(None),
        address_1: Set(None),
        address_2: Set(None),
        city: Set(None),
        region: Set(None),
        postal_code: Set(None),
        country: Set(None),
        shipping_region_id: Set(DEFAULT_SHIPPING_REGION_ID),
        day_phone: Set(None),
        eve_phone: Set(None),
        mob_phone: Set(None),
    }
    .insert(&state.orm)
    .await
    .map_err(email_conflict)?;

    tracing::info!(customer_id = customer.customer_id, "customer registered");
    authenticated(state, customer)
}

pub async fn login_customer(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<AuthenticatedCustomer> {
    let LoginRequest { email, password } = payload;
    let customer = Customers::find()
        .filter(CustomerCol::Email.eq(email.trim().to_lowercase()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::LoginFailure)?;

    if !verify_password(&password, &customer.password)? {
        return Err(AppError::LoginFailure);
    }

    tracing::info!(customer_id = customer.customer_id, "customer logged in");
    authenticated(state, customer)
}

pub async fn get_customer(state: &AppState, customer_id: i32) -> AppResult<Customer> {
    Customers::find_by_id(customer_id)
        .one(&state.orm)
        .await?
        .map(customer_from_entity)
        .ok_or_else(|| AppError::not_found("Customer", customer_id))
}

pub async fn update_profile(
    state: &AppState,
    payload: UpdateProfileRequest,
) -> AppResult<Customer> {
    let existing = find_by_email(state, &payload.email).await?;

    let mut active: CustomerActive = existing.into();
    if let Some(name) = non_empty(payload.name) {
        active.name = Set(name);
    }
    if let Some(password) = non_empty(payload.password) {
        active.password = Set(hash_password(&password)?);
    }
    active.day_phone = Set(non_empty(payload.day_phone));
    active.eve_phone = Set(non_empty(payload.eve_phone));
    active.mob_phone = Set(non_empty(payload.mob_phone));

    let customer = active.update(&state.orm).await?;
    Ok(customer_from_entity(customer))
}

pub async fn update_address(
    state: &AppState,
    payload: UpdateAddressRequest,
) -> AppResult<Customer> {
    let shipping_region_id = parse_shipping_region_id(payload.shipping_region_id.as_ref())?;
    let existing = find_by_email(state, &payload.email).await?;

    let mut active: CustomerActive = existing.into();
    active.address_1 = Set(non_empty(payload.address_1));
    active.address_2 = Set(non_empty(payload.address_2));
    active.city = Set(non_empty(payload.city));
    active.region = Set(non_empty(payload.region));
    active.postal_code = Set(non_empty(payload.postal_code));
    active.country = Set(non_empty(payload.country));
    active.shipping_region_id = Set(shipping_region_id);

    let customer = active.update(&state.orm).await?;
    Ok(customer_from_entity(customer))
}

pub async fn update_credit_card(
    state: &AppState,
    payload: UpdateCreditCardRequest,
) -> AppResult<Customer> {
    let credit_card = parse_credit_card(payload.credit_card.as_ref())?;
    let existing = find_by_email(state, &payload.email).await?;

    let mut active: CustomerActive = existing.into();
    active.credit_card = Set(Some(credit_card));

    let customer = active.update(&state.orm).await?;
    tracing::info!(customer_id = customer.customer_id, "credit card updated");
    Ok(customer_from_entity(customer))
}

async fn find_by_email(state: &AppState, email: &str) -> AppResult<CustomerModel> {
    let email = email.trim().to_lowercase();
    Customers::find()
        .filter(CustomerCol::Email.eq(email.as_str()))
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer with email {email} does not exist")))
}

// A concurrent registration can still hit the unique email index.
fn email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::BadRequest(EMAIL_TAKEN.to_string()),
        _ => AppError::OrmError(err),
    }
}

fn authenticated(state: &AppState, customer: CustomerModel) -> AppResult<AuthenticatedCustomer> {
    let access_token = issue_token(&state.auth, customer.customer_id)?;
    Ok(AuthenticatedCustomer {
        customer: customer_from_entity(customer),
        access_token,
        expires_in: format!("{}h", state.auth.ttl_hours),
    })
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();
    Ok(hash)
}

fn verify_password(password: &str, stored: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(stored)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

// Empty strings are stored as null.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        customer_id: model.customer_id,
        name: model.name,
        email: model.email,
        address_1: model.address_1,
        address_2: model.address_2,
        city: model.city,
        region: model.region,
        postal_code: model.postal_code,
        country: model.country,
        shipping_region_id: model.shipping_region_id,
        credit_card: model.credit_card.as_deref().map(mask_credit_card),
        day_phone: model.day_phone,
        eve_phone: model.eve_phone,
        mob_phone: model.mob_phone,
    }
}
