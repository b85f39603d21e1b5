//! Employee leave limit handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use uuid::Uuid;

use hrms_database::repositories::leave_limit::LeaveLimitFilter;
use hrms_service::leave_limit::{SaveLeaveLimit, UpdateLeaveLimit};

use crate::dto::request::{LeaveLimitFilterParams, SaveLeaveLimitRequest, UpdateLeaveLimitRequest};
use crate::dto::response::{
    ApiResponse, EmployeeLimitsResponse, EmployeeSummary, LeaveLimitResponse, MessageResponse,
    PaginatedResponse,
};
use crate::error::ApiError;
use crate::extractors::{ActingUser, PaginationParams};
use crate::state::AppState;

/// GET /api/employee-leave-limits
pub async fn list_limits(
    State(state): State<AppState>,
    Query(filter): Query<LeaveLimitFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PaginatedResponse<LeaveLimitResponse>>, ApiError> {
    let page = state
        .leave_limit_service
        .list(
            &LeaveLimitFilter {
                employee_id: filter.employee_id,
                leave_type: filter.leave_type,
            },
            &pagination.into_page_request(),
        )
        .await?;

    Ok(Json(PaginatedResponse::from_page(
        page.map(LeaveLimitResponse::from),
    )))
}

/// GET /api/employee-leave-limits/employee/{employee_id}
pub async fn get_employee_limits(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> Result<Json<ApiResponse<EmployeeLimitsResponse>>, ApiError> {
    let today = Utc::now().date_naive();
    let (employee, limits) = state
        .leave_limit_service
        .get_for_employee(employee_id, today)
        .await?;

    Ok(Json(ApiResponse::ok(EmployeeLimitsResponse {
        employee: EmployeeSummary::from(&employee),
        limits: limits.into_iter().map(LeaveLimitResponse::from).collect(),
    })))
}

/// POST /api/employee-leave-limits
pub async fn save_limit(
    State(state): State<AppState>,
    actor: ActingUser,
    Json(req): Json<SaveLeaveLimitRequest>,
) -> Result<Json<ApiResponse<LeaveLimitResponse>>, ApiError> {
    let limit = state
        .leave_limit_service
        .upsert(
            SaveLeaveLimit {
                employee_id: req.employee_id,
                leave_type: req.leave_type,
                max_days_per_month: req.max_days_per_month,
                max_paid_requests_per_year: req.max_paid_requests_per_year,
                reason: req.reason,
                effective_from: req.effective_from,
                effective_until: req.effective_until,
            },
            actor.0,
        )
        .await?;

    let expanded = state.leave_limit_service.expand_one(limit).await?;

    Ok(Json(ApiResponse::with_message(
        "Employee leave limit saved successfully",
        LeaveLimitResponse::from(expanded),
    )))
}

/// PUT /api/employee-leave-limits/{id}
pub async fn update_limit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    actor: ActingUser,
    Json(req): Json<UpdateLeaveLimitRequest>,
) -> Result<Json<ApiResponse<LeaveLimitResponse>>, ApiError> {
    let limit = state
        .leave_limit_service
        .update(
            id,
            UpdateLeaveLimit {
                max_days_per_month: req.max_days_per_month,
                max_paid_requests_per_year: req.max_paid_requests_per_year,
                reason: req.reason,
                effective_from: req.effective_from,
                effective_until: req.effective_until,
            },
            actor.0,
        )
        .await?;

    let expanded = state.leave_limit_service.expand_one(limit).await?;

    Ok(Json(ApiResponse::with_message(
        "Employee leave limit updated successfully",
        LeaveLimitResponse::from(expanded),
    )))
}

/// DELETE /api/employee-leave-limits/{id}
pub async fn delete_limit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.leave_limit_service.soft_delete(id).await?;

    Ok(Json(MessageResponse::ok(
        "Employee leave limit deleted successfully",
    )))
}
