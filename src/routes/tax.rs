use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult, models::Tax, response::ErrorBody, services::tax_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tax", get(list_taxes))
        .route("/tax/{tax_id}", get(get_tax))
}

#[utoipa::path(
    get,
    path = "/tax",
    responses(
        (status = 200, description = "All taxes", body = Vec<Tax>)
    ),
    tag = "Tax"
)]
pub async fn list_taxes(State(state): State<AppState>) -> AppResult<Json<Vec<Tax>>> {
    let taxes = tax_service::list_taxes(&state).await?;
    Ok(Json(taxes))
}

#[utoipa::path(
    get,
    path = "/tax/{tax_id}",
    params(
        ("tax_id" = i32, Path, description = "Tax ID")
    ),
    responses(
        (status = 200, description = "Single tax", body = Tax),
        (status = 404, description = "Tax not found", body = ErrorBody),
    ),
    tag = "Tax"
)]
pub async fn get_tax(
    State(state): State<AppState>,
    Path(tax_id): Path<i32>,
) -> AppResult<Json<Tax>> {
    let tax = tax_service::get_tax(&state, tax_id).await?;
    Ok(Json(tax))
}
