use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CartId {
    pub cart_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub cart_id: String,
    pub product_id: i32,
    #[serde(default)]
    pub attributes: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}
