use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    error::AppResult,
    models::Department,
    response::ErrorBody,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/departments", get(list_departments))
        .route("/departments/{department_id}", get(get_department))
}

#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All departments", body = Vec<Department>)
    ),
    tag = "Departments"
)]
pub async fn list_departments(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = catalog_service::list_departments(&state).await?;
    Ok(Json(departments))
}

#[utoipa::path(
    get,
    path = "/departments/{department_id}",
    params(
        ("department_id" = i32, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Single department", body = Department),
        (status = 404, description = "Department not found", body = ErrorBody),
    ),
    tag = "Departments"
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
) -> AppResult<Json<Department>> {
    let department = catalog_service::get_department(&state, department_id).await?;
    Ok(Json(department))
}
