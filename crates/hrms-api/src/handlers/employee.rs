//! Employee picker handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, EmployeeSummary};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/employee-leave-limits/employees/dropdown
pub async fn employees_dropdown(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeSummary>>>, ApiError> {
    let employees = state.employee_service.list_for_picker().await?;

    Ok(Json(ApiResponse::ok(
        employees.iter().map(EmployeeSummary::from).collect(),
    )))
}
