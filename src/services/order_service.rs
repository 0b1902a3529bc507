use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::orders::{CreateOrderRequest, OrderCreated},
    entity::{
        order_detail::{
            ActiveModel as DetailActive, Column as DetailCol, Entity as OrderDetails,
            Model as DetailModel,
        },
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        product::Entity as Products,
        shipping::Entity as Shippings,
        shopping_cart::{Column as CartCol, Entity as ShoppingCart},
        tax::Entity as Taxes,
    },
    error::{AppError, AppResult},
    middleware::auth::AuthCustomer,
    models::{Order, OrderLine, OrderShortDetail},
    state::AppState,
};

pub const STATUS_PLACED: i32 = 0;
pub const STATUS_PAID: i32 = 1;

/// Places an order from every line of the cart, then empties the cart.
pub async fn create_order(
    state: &AppState,
    customer: &AuthCustomer,
    payload: CreateOrderRequest,
) -> AppResult<OrderCreated> {
    let txn = state.orm.begin().await?;

    let lines = ShoppingCart::find()
        .filter(CartCol::CartId.eq(payload.cart_id.as_str()))
        .order_by_asc(CartCol::ItemId)
        .find_also_related(Products)
        .all(&txn)
        .await?;

    if lines.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let shipping = Shippings::find_by_id(payload.shipping_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Shipping", payload.shipping_id))?;
    let tax = Taxes::find_by_id(payload.tax_id)
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::not_found("Tax", payload.tax_id))?;

    let mut priced = Vec::with_capacity(lines.len());
    for (line, product) in lines {
        let product = product.ok_or_else(|| {
            AppError::BadRequest(format!("Product {} is no longer available", line.product_id))
        })?;
        if line.quantity <= 0 {
            return Err(AppError::BadRequest("Cart has invalid quantity".into()));
        }
        priced.push((line, product));
    }

    let subtotal = priced
        .iter()
        .try_fold(0_i64, |acc, (line, product)| {
            product
                .effective_price()
                .checked_mul(i64::from(line.quantity))
                .and_then(|cost| acc.checked_add(cost))
        })
        .ok_or_else(|| AppError::BadRequest("Order total is too large".into()))?;
    let total_amount = order_total(subtotal, tax.tax_percentage, shipping.shipping_cost);

    let order = OrderActive {
        order_id: NotSet,
        total_amount: Set(total_amount),
        created_on: NotSet,
        shipped_on: Set(None),
        status: Set(STATUS_PLACED),
        comments: Set(None),
        customer_id: Set(customer.customer_id),
        auth_code: Set(None),
        reference: Set(None),
        shipping_id: Set(shipping.shipping_id),
        tax_id: Set(tax.tax_id),
    }
    .insert(&txn)
    .await?;

    for (line, product) in &priced {
        DetailActive {
            item_id: NotSet,
            order_id: Set(order.order_id),
            product_id: Set(product.product_id),
            attributes: Set(line.attributes.clone()),
            product_name: Set(product.name.clone()),
            quantity: Set(line.quantity),
            unit_cost: Set(product.effective_price()),
        }
        .insert(&txn)
        .await?;
    }

    // clear cart
    ShoppingCart::delete_many()
        .filter(CartCol::CartId.eq(payload.cart_id.as_str()))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    tracing::info!(
        order_id = order.order_id,
        customer_id = customer.customer_id,
        total_amount,
        "order placed"
    );

    Ok(OrderCreated {
        order_id: order.order_id,
    })
}

pub async fn order_lines(
    state: &AppState,
    customer: &AuthCustomer,
    order_id: i32,
) -> AppResult<Vec<OrderLine>> {
    let order = find_customer_order(state, customer, order_id).await?;

    let lines = OrderDetails::find()
        .filter(DetailCol::OrderId.eq(order.order_id))
        .order_by_asc(DetailCol::ItemId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_line_from_entity)
        .collect();
    Ok(lines)
}

pub async fn customer_orders(state: &AppState, customer: &AuthCustomer) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .filter(OrderCol::CustomerId.eq(customer.customer_id))
        .order_by_desc(OrderCol::CreatedOn)
        .order_by_desc(OrderCol::OrderId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();
    Ok(orders)
}

pub async fn short_detail(
    state: &AppState,
    customer: &AuthCustomer,
    order_id: i32,
) -> AppResult<OrderShortDetail> {
    let detail = sqlx::query_as::<_, OrderShortDetail>(
        r#"
        SELECT o.order_id, o.total_amount, o.created_on, o.shipped_on, o.status, c.name
        FROM orders o
        JOIN customer c ON c.customer_id = o.customer_id
        WHERE o.order_id = $1 AND o.customer_id = $2
        "#,
    )
    .bind(order_id)
    .bind(customer.customer_id)
    .fetch_optional(&state.pool)
    .await?;

    detail.ok_or_else(|| AppError::not_found("Order", order_id))
}

async fn find_customer_order(
    state: &AppState,
    customer: &AuthCustomer,
    order_id: i32,
) -> AppResult<OrderModel> {
    Orders::find()
        .filter(
            Condition::all()
                .add(OrderCol::CustomerId.eq(customer.customer_id))
                .add(OrderCol::OrderId.eq(order_id)),
        )
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Order", order_id))
}

/// Subtotal plus rounded percentage tax plus flat shipping, all in minor units.
pub fn order_total(subtotal: i64, tax_percentage: f64, shipping_cost: i64) -> i64 {
    let tax = (subtotal as f64 * tax_percentage / 100.0).round() as i64;
    subtotal + tax + shipping_cost
}

pub(crate) fn order_from_entity(model: OrderModel) -> Order {
    Order {
        order_id: model.order_id,
        total_amount: model.total_amount,
        created_on: model.created_on.with_timezone(&Utc),
        shipped_on: model.shipped_on.map(|dt| dt.with_timezone(&Utc)),
        status: model.status,
        comments: model.comments,
        customer_id: model.customer_id,
        auth_code: model.auth_code,
        reference: model.reference,
        shipping_id: model.shipping_id,
        tax_id: model.tax_id,
    }
}

fn order_line_from_entity(model: DetailModel) -> OrderLine {
    OrderLine {
        order_id: model.order_id,
        product_id: model.product_id,
        subtotal: model.unit_cost * i64::from(model.quantity),
        attributes: model.attributes,
        product_name: model.product_name,
        quantity: model.quantity,
        unit_cost: model.unit_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::order_total;

    #[test]
    fn total_adds_tax_and_shipping() {
        assert_eq!(order_total(10_000, 8.5, 2_000), 12_850);
        assert_eq!(order_total(10_000, 0.0, 0), 10_000);
    }

    #[test]
    fn tax_rounds_to_nearest_minor_unit() {
        // 1999 * 8.5% = 169.915
        assert_eq!(order_total(1_999, 8.5, 0), 2_169);
    }
}
