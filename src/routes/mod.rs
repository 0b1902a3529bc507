use axum::Router;

use crate::state::AppState;

pub mod attributes;
pub mod cart;
pub mod categories;
pub mod customers;
pub mod departments;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod shipping;
pub mod stripe;
pub mod tax;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(attributes::router())
        .merge(customers::router())
        .merge(products::router())
        .merge(departments::router())
        .merge(categories::router())
        .merge(shipping::router())
        .merge(tax::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(stripe::router())
}
