use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartId, UpdateCartItemRequest},
        customers::{
            AuthenticatedCustomer, LoginRequest, RegisterRequest, UpdateAddressRequest,
            UpdateCreditCardRequest, UpdateProfileRequest,
        },
        orders::{CreateOrderRequest, OrderCreated},
        payments::{ChargeReceipt, ChargeRequest},
        products::PostReviewRequest,
    },
    models::{
        Attribute, AttributeValue, CartLine, Category, CategoryBrief, Customer, Department,
        Order, OrderLine, OrderShortDetail, Product, ProductAttributeDetail, ProductSummary,
        Review, ReviewView, Shipping, ShippingRegion, Tax,
    },
    response::{ErrorBody, ErrorDetail, Paginated, PaginationMeta, Rows},
    routes::{
        attributes, cart, categories, customers, departments, health, orders, params, products,
        shipping, stripe, tax,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        attributes::list_attributes,
        attributes::get_attribute,
        attributes::attribute_values,
        attributes::product_attributes,
        customers::register,
        customers::login,
        customers::get_customer,
        customers::update_profile,
        customers::update_address,
        customers::update_credit_card,
        products::list_products,
        products::search_products,
        products::get_product,
        products::products_in_category,
        products::products_in_department,
        products::list_reviews,
        products::post_review,
        departments::list_departments,
        departments::get_department,
        categories::list_categories,
        categories::get_category,
        categories::categories_in_product,
        categories::categories_in_department,
        shipping::list_regions,
        shipping::shipping_in_region,
        tax::list_taxes,
        tax::get_tax,
        cart::generate_unique_id,
        cart::add_to_cart,
        cart::get_cart,
        cart::update_cart_item,
        cart::empty_cart,
        cart::remove_from_cart,
        orders::create_order,
        orders::customer_orders,
        orders::get_order,
        orders::short_detail,
        stripe::charge
    ),
    components(
        schemas(
            Attribute,
            AttributeValue,
            ProductAttributeDetail,
            Customer,
            AuthenticatedCustomer,
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            UpdateAddressRequest,
            UpdateCreditCardRequest,
            Product,
            ProductSummary,
            Review,
            ReviewView,
            PostReviewRequest,
            Department,
            Category,
            CategoryBrief,
            ShippingRegion,
            Shipping,
            Tax,
            CartId,
            CartLine,
            AddToCartRequest,
            UpdateCartItemRequest,
            Order,
            OrderLine,
            OrderShortDetail,
            CreateOrderRequest,
            OrderCreated,
            ChargeRequest,
            ChargeReceipt,
            params::Pagination,
            params::SearchQuery,
            PaginationMeta,
            Paginated<ProductSummary>,
            Rows<Category>,
            ErrorBody,
            ErrorDetail,
            health::HealthData
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Attributes", description = "Product attribute endpoints"),
        (name = "Customers", description = "Customer account endpoints"),
        (name = "Products", description = "Product and review endpoints"),
        (name = "Departments", description = "Department endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Shipping", description = "Shipping region endpoints"),
        (name = "Tax", description = "Tax endpoints"),
        (name = "Cart", description = "Shopping cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Payments", description = "Card charge endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
