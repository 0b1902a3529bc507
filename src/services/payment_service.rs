//! Card charge stub: records the charge against the order without calling a processor.

use sea_orm::{ActiveModelTrait, EntityTrait, QuerySelect, Set, TransactionTrait};
use sea_orm::sea_query::LockType;
use uuid::Uuid;

use crate::{
    dto::payments::{ChargeReceipt, ChargeRequest},
    entity::orders::{ActiveModel as OrderActive, Entity as Orders},
    error::{AppError, AppResult},
    services::order_service::STATUS_PAID,
    state::AppState,
};

const DEFAULT_CURRENCY: &str = "USD";
const REFERENCE_MAX_LEN: usize = 50;

pub async fn charge(state: &AppState, payload: ChargeRequest) -> AppResult<ChargeReceipt> {
    if payload.amount <= 0 {
        return Err(AppError::BadRequest("amount must be greater than 0".into()));
    }
    let token = payload.stripe_token.trim();
    if token.is_empty() {
        return Err(AppError::BadRequest("stripeToken is required".into()));
    }
    let currency = normalize_currency(payload.currency.as_deref())?;

    let txn = state.orm.begin().await?;

    let order = Orders::find_by_id(payload.order_id)
        .lock(LockType::Update)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Order", payload.order_id))?;

    if order.status == STATUS_PAID {
        return Err(AppError::BadRequest("Order already paid".into()));
    }

    let charge_id = format!("ch_{}", Uuid::new_v4().simple());
    let mut active: OrderActive = order.into();
    active.status = Set(STATUS_PAID);
    active.auth_code = Set(Some(charge_id.clone()));
    active.reference = Set(Some(token.chars().take(REFERENCE_MAX_LEN).collect()));
    let order = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        order_id = order.order_id,
        amount = payload.amount,
        currency = %currency,
        "charge recorded"
    );

    Ok(ChargeReceipt {
        id: charge_id,
        amount: payload.amount,
        currency,
        description: payload.description,
        order_id: order.order_id,
        paid: true,
        status: "succeeded".to_string(),
    })
}

fn normalize_currency(currency: Option<&str>) -> AppResult<String> {
    let currency = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY);
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest("currency must be a 3-letter code".into()));
    }
    Ok(currency.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::normalize_currency;

    #[test]
    fn currency_defaults_and_uppercases() {
        assert_eq!(normalize_currency(None).unwrap(), "USD");
        assert_eq!(normalize_currency(Some(" ")).unwrap(), "USD");
        assert_eq!(normalize_currency(Some("eur")).unwrap(), "EUR");
    }

    #[test]
    fn currency_must_be_three_letters() {
        assert!(normalize_currency(Some("EURO")).is_err());
        assert!(normalize_currency(Some("U$D")).is_err());
    }
}
