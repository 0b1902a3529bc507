//! Input predicates for the customer write endpoints.
//!
//! Both checks run before any data access and reject with a fixed message.

use serde_json::Value;

use crate::error::AppError;

pub const INVALID_CREDIT_CARD: &str = "please enter a valid credit card";
pub const INVALID_SHIPPING_REGION: &str = "shipping_region_id needs to be a number";

const CREDIT_CARD_LEN: usize = 16;
const CREDIT_CARD_SUFFIX: &str = "7890";

/// A card number is 16 ASCII digits ending in `7890`.
pub fn is_valid_credit_card(card: &str) -> bool {
    card.len() == CREDIT_CARD_LEN
        && card.bytes().all(|b| b.is_ascii_digit())
        && card.ends_with(CREDIT_CARD_SUFFIX)
}

/// Clients send the card either as a JSON string or a bare number.
pub fn credit_card_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => n.as_u64().map(|n| n.to_string()),
        _ => None,
    }
}

pub fn parse_credit_card(value: Option<&Value>) -> Result<String, AppError> {
    value
        .and_then(credit_card_text)
        .filter(|card| is_valid_credit_card(card))
        .ok_or_else(|| AppError::BadRequest(INVALID_CREDIT_CARD.to_string()))
}

/// Accepts an integer or an integer-valued string. A parsed `0` maps to region 1.
pub fn parse_shipping_region_id(value: Option<&Value>) -> Result<i32, AppError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    };
    match parsed {
        Some(0) => Ok(1),
        Some(id) => Ok(id),
        None => Err(AppError::BadRequest(INVALID_SHIPPING_REGION.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_sixteen_digits_ending_in_7890() {
        assert!(is_valid_credit_card("1234567812347890"));
        assert!(is_valid_credit_card("0000000000007890"));
    }

    #[test]
    fn rejects_malformed_cards() {
        for card in [
            "",
            "7890",
            "123456781234789",
            "12345678123478900",
            "1234567812341234",
            "12345678abcd7890",
            "1234 5678 1237890",
            "-234567812347890",
        ] {
            assert!(!is_valid_credit_card(card), "{card:?} should be rejected");
        }
    }

    #[test]
    fn card_may_arrive_as_a_number() {
        let card = parse_credit_card(Some(&json!(1234567812347890_u64))).unwrap();
        assert_eq!(card, "1234567812347890");
    }

    #[test]
    fn missing_or_odd_card_values_are_bad_requests() {
        for value in [None, Some(json!(null)), Some(json!(true)), Some(json!(12.5))] {
            let err = parse_credit_card(value.as_ref()).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref m) if m == INVALID_CREDIT_CARD));
        }
    }

    #[test]
    fn shipping_region_parses_numbers_and_strings() {
        assert_eq!(parse_shipping_region_id(Some(&json!(3))).unwrap(), 3);
        assert_eq!(parse_shipping_region_id(Some(&json!(" 4 "))).unwrap(), 4);
        assert_eq!(parse_shipping_region_id(Some(&json!(0))).unwrap(), 1);
    }

    #[test]
    fn shipping_region_rejects_non_numbers() {
        for value in [None, Some(json!("north")), Some(json!(2.5)), Some(json!([]))] {
            let err = parse_shipping_region_id(value.as_ref()).unwrap_err();
            assert!(matches!(err, AppError::BadRequest(ref m) if m == INVALID_SHIPPING_REGION));
        }
    }
}
