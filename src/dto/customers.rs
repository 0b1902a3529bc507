use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::Customer;

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthenticatedCustomer {
    pub customer: Customer,
    #[serde(rename = "accessToken")]
    pub access_token: String,
    pub expires_in: String,
}

/// Absent phone fields are cleared; an absent name keeps the stored one.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub name: Option<String>,
    pub password: Option<String>,
    pub day_phone: Option<String>,
    pub eve_phone: Option<String>,
    pub mob_phone: Option<String>,
}

/// Every absent address field is cleared.
#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateAddressRequest {
    #[serde(default)]
    pub email: String,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Integer or integer-valued string.
    #[schema(value_type = Object)]
    pub shipping_region_id: Option<Value>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateCreditCardRequest {
    #[serde(default)]
    pub email: String,
    /// String or number; must be 16 digits ending in 7890.
    #[schema(value_type = String)]
    pub credit_card: Option<Value>,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
