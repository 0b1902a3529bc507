use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Department {
    pub department_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub category_id: i32,
    pub department_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct CategoryBrief {
    pub category_id: i32,
    pub department_id: i32,
    pub name: String,
}

/// Prices are integer minor units.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub discounted_price: i64,
    pub image: Option<String>,
    pub image_2: Option<String>,
    pub thumbnail: Option<String>,
    pub display: i16,
}

/// Listing shape: no full-size images and a truncated description.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct ProductSummary {
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub discounted_price: i64,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Attribute {
    pub attribute_id: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttributeValue {
    pub attribute_value_id: i32,
    pub attribute_id: i32,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct ProductAttributeDetail {
    pub attribute_name: String,
    pub attribute_value_id: i32,
    pub attribute_value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub shipping_region_id: i32,
    /// Only the last four digits are ever returned.
    pub credit_card: Option<String>,
    pub day_phone: Option<String>,
    pub eve_phone: Option<String>,
    pub mob_phone: Option<String>,
}

pub fn mask_credit_card(card: &str) -> String {
    let total = card.chars().count();
    let hidden = total.saturating_sub(4);
    card.chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { 'X' } else { c })
        .collect()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Tax {
    pub tax_id: i32,
    pub tax_type: String,
    pub tax_percentage: f64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShippingRegion {
    pub shipping_region_id: i32,
    pub shipping_region: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Shipping {
    pub shipping_id: i32,
    pub shipping_type: String,
    pub shipping_cost: i64,
    pub shipping_region_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct CartLine {
    pub item_id: i32,
    pub name: String,
    pub attributes: String,
    pub product_id: i32,
    pub price: i64,
    pub quantity: i32,
    pub image: Option<String>,
    pub subtotal: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: i32,
    pub total_amount: i64,
    pub created_on: DateTime<Utc>,
    pub shipped_on: Option<DateTime<Utc>>,
    pub status: i32,
    pub comments: Option<String>,
    pub customer_id: i32,
    pub auth_code: Option<String>,
    pub reference: Option<String>,
    pub shipping_id: i32,
    pub tax_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub order_id: i32,
    pub product_id: i32,
    pub attributes: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_cost: i64,
    pub subtotal: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct OrderShortDetail {
    pub order_id: i32,
    pub total_amount: i64,
    pub created_on: DateTime<Utc>,
    pub shipped_on: Option<DateTime<Utc>>,
    pub status: i32,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub review_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub review: String,
    pub rating: i16,
    pub created_on: DateTime<Utc>,
}

/// Review as listed under a product, with the author's name.
#[derive(Debug, Serialize, Deserialize, ToSchema, FromRow)]
pub struct ReviewView {
    pub name: String,
    pub review: String,
    pub rating: i16,
    pub created_on: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::mask_credit_card;

    #[test]
    fn masks_all_but_last_four_digits() {
        assert_eq!(mask_credit_card("1234567812347890"), "XXXXXXXXXXXX7890");
        assert_eq!(mask_credit_card("890"), "890");
        assert_eq!(mask_credit_card(""), "");
    }
}
