pub mod cart;
pub mod customers;
pub mod orders;
pub mod payments;
pub mod products;
