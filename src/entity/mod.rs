pub mod attribute;
pub mod attribute_value;
pub mod category;
pub mod customer;
pub mod department;
pub mod order_detail;
pub mod orders;
pub mod product;
pub mod product_attribute;
pub mod product_category;
pub mod review;
pub mod shipping;
pub mod shipping_region;
pub mod shopping_cart;
pub mod tax;

pub use attribute::Entity as Attributes;
pub use attribute_value::Entity as AttributeValues;
pub use category::Entity as Categories;
pub use customer::Entity as Customers;
pub use department::Entity as Departments;
pub use order_detail::Entity as OrderDetails;
pub use orders::Entity as Orders;
pub use product::Entity as Products;
pub use product_attribute::Entity as ProductAttributes;
pub use product_category::Entity as ProductCategories;
pub use review::Entity as Reviews;
pub use shipping::Entity as Shippings;
pub use shipping_region::Entity as ShippingRegions;
pub use shopping_cart::Entity as ShoppingCart;
pub use tax::Entity as Taxes;
