use sea_orm::{EntityTrait, QueryOrder};

use crate::{
    entity::tax::{Column, Entity as Taxes, Model as TaxModel},
    error::{AppError, AppResult},
    models::Tax,
    state::AppState,
};

pub async fn list_taxes(state: &AppState) -> AppResult<Vec<Tax>> {
    let taxes = Taxes::find()
        .order_by_asc(Column::TaxId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(tax_from_entity)
        .collect();
    Ok(taxes)
}

pub async fn get_tax(state: &AppState, tax_id: i32) -> AppResult<Tax> {
    Taxes::find_by_id(tax_id)
        .one(&state.orm)
        .await?
        .map(tax_from_entity)
        .ok_or_else(|| AppError::not_found("Tax", tax_id))
}

fn tax_from_entity(model: TaxModel) -> Tax {
    Tax {
        tax_id: model.tax_id,
        tax_type: model.tax_type,
        tax_percentage: model.tax_percentage,
    }
}
