use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity::{
        shipping::{Column as ShippingCol, Entity as Shippings},
        shipping_region::{Column as RegionCol, Entity as ShippingRegions},
    },
    error::{AppError, AppResult},
    models::{Shipping, ShippingRegion},
    state::AppState,
};

pub async fn list_regions(state: &AppState) -> AppResult<Vec<ShippingRegion>> {
    let regions = ShippingRegions::find()
        .order_by_asc(RegionCol::ShippingRegionId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| ShippingRegion {
            shipping_region_id: model.shipping_region_id,
            shipping_region: model.shipping_region,
        })
        .collect();
    Ok(regions)
}

pub async fn shipping_in_region(
    state: &AppState,
    shipping_region_id: i32,
) -> AppResult<Vec<Shipping>> {
    if ShippingRegions::find_by_id(shipping_region_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::not_found("Shipping region", shipping_region_id));
    }

    let options = Shippings::find()
        .filter(ShippingCol::ShippingRegionId.eq(shipping_region_id))
        .order_by_asc(ShippingCol::ShippingId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|model| Shipping {
            shipping_id: model.shipping_id,
            shipping_type: model.shipping_type,
            shipping_cost: model.shipping_cost,
            shipping_region_id: model.shipping_region_id,
        })
        .collect();
    Ok(options)
}
