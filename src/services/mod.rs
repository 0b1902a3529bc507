pub mod attribute_service;
pub mod cart_service;
pub mod catalog_service;
pub mod customer_service;
pub mod order_service;
pub mod payment_service;
pub mod product_service;
pub mod shipping_service;
pub mod tax_service;
