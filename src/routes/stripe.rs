use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::payments::{ChargeReceipt, ChargeRequest},
    error::AppResult,
    extract::AppJson,
    response::ErrorBody,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/stripe/charge", post(charge))
}

#[utoipa::path(
    post,
    path = "/stripe/charge",
    request_body = ChargeRequest,
    responses(
        (status = 200, description = "Charge recorded against the order", body = ChargeReceipt),
        (status = 400, description = "Invalid amount, token or currency, or order already paid", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Payments"
)]
pub async fn charge(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ChargeRequest>,
) -> AppResult<Json<ChargeReceipt>> {
    let receipt = payment_service::charge(&state, payload).await?;
    Ok(Json(receipt))
}
