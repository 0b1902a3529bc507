use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub cart_id: String,
    pub shipping_id: i32,
    pub tax_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreated {
    #[serde(rename = "orderId")]
    pub order_id: i32,
}
