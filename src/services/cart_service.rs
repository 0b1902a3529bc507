use sea_orm::{ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, Set};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartId, UpdateCartItemRequest},
    entity::{
        product::Entity as Products,
        shopping_cart::{ActiveModel as CartActive, Column as CartCol, Entity as ShoppingCart},
    },
    error::{AppError, AppResult},
    models::CartLine,
    state::AppState,
};

const MAX_CART_ID_LEN: usize = 36;

pub fn generate_cart_id() -> CartId {
    CartId {
        cart_id: Uuid::new_v4().to_string(),
    }
}

pub async fn list_cart(state: &AppState, cart_id: &str) -> AppResult<Vec<CartLine>> {
    let lines = sqlx::query_as::<_, CartLine>(
        r#"
        SELECT sc.item_id, p.name, sc.attributes, sc.product_id,
               CASE WHEN p.discounted_price > 0 THEN p.discounted_price ELSE p.price END AS price,
               sc.quantity, p.thumbnail AS image,
               (CASE WHEN p.discounted_price > 0 THEN p.discounted_price ELSE p.price END)
                   * sc.quantity AS subtotal
        FROM shopping_cart sc
        JOIN product p ON p.product_id = sc.product_id
        WHERE sc.cart_id = $1
        ORDER BY sc.item_id
        "#,
    )
    .bind(cart_id)
    .fetch_all(&state.pool)
    .await?;
    Ok(lines)
}

/// Adding the same product with the same attributes bumps the quantity instead of adding a line.
pub async fn add_to_cart(state: &AppState, payload: AddToCartRequest) -> AppResult<Vec<CartLine>> {
    let cart_id = validate_cart_id(&payload.cart_id)?;

    if Products::find_by_id(payload.product_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Product", payload.product_id));
    }

    let exist = ShoppingCart::find()
        .filter(
            Condition::all()
                .add(CartCol::CartId.eq(cart_id))
                .add(CartCol::ProductId.eq(payload.product_id))
                .add(CartCol::Attributes.eq(payload.attributes.as_str())),
        )
        .one(&state.orm)
        .await?;

    if let Some(item) = exist {
        let quantity = bump_quantity(item.quantity)?;
        let mut active: CartActive = item.into();
        active.quantity = Set(quantity);
        active.update(&state.orm).await?;
    } else {
        CartActive {
            item_id: NotSet,
            cart_id: Set(cart_id.to_string()),
            product_id: Set(payload.product_id),
            attributes: Set(payload.attributes.clone()),
            quantity: Set(1),
            buy_now: Set(true),
            added_on: NotSet,
        }
        .insert(&state.orm)
        .await?;
    }

    tracing::debug!(cart_id, product_id = payload.product_id, "cart item added");
    list_cart(state, cart_id).await
}

pub async fn update_item(
    state: &AppState,
    item_id: i32,
    payload: UpdateCartItemRequest,
) -> AppResult<Vec<CartLine>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    let item = ShoppingCart::find_by_id(item_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Cart item", item_id))?;
    let cart_id = item.cart_id.clone();

    let mut active: CartActive = item.into();
    active.quantity = Set(payload.quantity);
    active.update(&state.orm).await?;

    list_cart(state, &cart_id).await
}

pub async fn empty_cart(state: &AppState, cart_id: &str) -> AppResult<Vec<CartLine>> {
    let result = ShoppingCart::delete_many()
        .filter(CartCol::CartId.eq(cart_id))
        .exec(&state.orm)
        .await?;
    tracing::debug!(cart_id, removed = result.rows_affected, "cart emptied");
    Ok(Vec::new())
}

pub async fn remove_item(state: &AppState, item_id: i32) -> AppResult<serde_json::Value> {
    let result = ShoppingCart::delete_by_id(item_id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Cart item", item_id));
    }

    Ok(serde_json::json!({}))
}

fn bump_quantity(quantity: i32) -> AppResult<i32> {
    quantity
        .checked_add(1)
        .ok_or_else(|| AppError::BadRequest("quantity is too large".to_string()))
}

fn validate_cart_id(cart_id: &str) -> AppResult<&str> {
    let cart_id = cart_id.trim();
    if cart_id.is_empty() || cart_id.len() > MAX_CART_ID_LEN {
        return Err(AppError::BadRequest(format!(
            "cart_id must be 1 to {MAX_CART_ID_LEN} characters"
        )));
    }
    Ok(cart_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_cart_ids_are_unique_uuids() {
        let a = generate_cart_id().cart_id;
        let b = generate_cart_id().cart_id;
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
        assert_eq!(a.len(), MAX_CART_ID_LEN);
    }

    #[test]
    fn bumping_stops_at_the_i32_bound() {
        assert_eq!(bump_quantity(1).unwrap(), 2);
        assert!(matches!(
            bump_quantity(i32::MAX),
            Err(AppError::BadRequest(ref m)) if m == "quantity is too large"
        ));
    }

    #[test]
    fn cart_id_bounds() {
        assert!(validate_cart_id("   ").is_err());
        assert!(validate_cart_id(&"x".repeat(37)).is_err());
        assert_eq!(validate_cart_id(" abc ").unwrap(), "abc");
    }
}
