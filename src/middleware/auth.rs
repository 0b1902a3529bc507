use axum::{extract::FromRequestParts, http::header};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    dto::customers::Claims,
    error::AppError,
    state::{AppState, AuthSettings},
};

/// Customer identified by a bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthCustomer {
    pub customer_id: i32,
}

pub fn issue_token(settings: &AuthSettings, customer_id: i32) -> Result<String, AppError> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(settings.ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: customer_id.to_string(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(format!("Bearer {}", token))
}

pub fn verify_token(settings: &AuthSettings, token: &str) -> Result<AuthCustomer, AppError> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    let customer_id = decoded
        .claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized("Invalid customer id in token".into()))?;

    Ok(AuthCustomer { customer_id })
}

impl FromRequestParts<AppState> for AuthCustomer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization scheme".into()))?;

        verify_token(&state.auth, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn settings(secret: &str) -> AuthSettings {
        AuthSettings {
            secret: Arc::from(secret),
            ttl_hours: 24,
        }
    }

    #[test]
    fn issued_token_round_trips_to_the_customer() {
        let settings = settings("test-secret");
        let header = issue_token(&settings, 17).unwrap();
        let token = header.strip_prefix("Bearer ").unwrap();
        let customer = verify_token(&settings, token).unwrap();
        assert_eq!(customer.customer_id, 17);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let header = issue_token(&settings("one"), 17).unwrap();
        let token = header.strip_prefix("Bearer ").unwrap();
        let err = verify_token(&settings("two"), token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
