use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChargeRequest {
    #[serde(rename = "stripeToken")]
    pub stripe_token: String,
    pub order_id: i32,
    pub description: String,
    pub amount: i64,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChargeReceipt {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub description: String,
    pub order_id: i32,
    pub paid: bool,
    pub status: String,
}
