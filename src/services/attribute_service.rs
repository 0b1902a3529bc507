use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::{
        attribute::{Column as AttributeCol, Entity as Attributes, Model as AttributeModel},
        attribute_value::{Column as ValueCol, Entity as AttributeValues},
    },
    error::{AppError, AppResult},
    models::{Attribute, AttributeValue, ProductAttributeDetail},
    state::AppState,
};

pub async fn list_attributes(state: &AppState) -> AppResult<Vec<Attribute>> {
    let attributes = Attributes::find()
        .order_by_asc(AttributeCol::AttributeId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(attribute_from_entity)
        .collect();
    Ok(attributes)
}

pub async fn get_attribute(state: &AppState, attribute_id: i32) -> AppResult<Attribute> {
    Attributes::find_by_id(attribute_id)
        .one(&state.orm)
        .await?
        .map(attribute_from_entity)
        .ok_or_else(|| AppError::not_found("Attribute", attribute_id))
}

pub async fn attribute_values(
    state: &AppState,
    attribute_id: i32,
) -> AppResult<Vec<AttributeValue>> {
    let values = AttributeValues::find()
        .filter(ValueCol::AttributeId.eq(attribute_id))
        .order_by_asc(ValueCol::AttributeValueId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| AttributeValue {
            attribute_value_id: model.attribute_value_id,
            attribute_id: model.attribute_id,
            value: model.value,
        })
        .collect();
    Ok(values)
}

pub async fn product_attributes(
    state: &AppState,
    product_id: i32,
) -> AppResult<Vec<ProductAttributeDetail>> {
    let rows = sqlx::query_as::<_, ProductAttributeDetail>(
        r#"
        SELECT a.name AS attribute_name, av.attribute_value_id, av.value AS attribute_value
        FROM product_attribute pa
        JOIN attribute_value av ON av.attribute_value_id = pa.attribute_value_id
        JOIN attribute a ON a.attribute_id = av.attribute_id
        WHERE pa.product_id = $1
        ORDER BY a.name, av.attribute_value_id
        "#,
    )
    .bind(product_id)
    .fetch_all(&state.pool)
    .await?;
    Ok(rows)
}

fn attribute_from_entity(model: AttributeModel) -> Attribute {
    Attribute {
        attribute_id: model.attribute_id,
        name: model.name,
    }
}
