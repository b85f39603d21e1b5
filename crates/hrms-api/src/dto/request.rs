//! Request DTOs.
//!
//! Field validation happens in the service layer so that every failing
//! field can be reported at once; these structs only shape the JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create-or-update request body (`POST /employee-leave-limits`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveLeaveLimitRequest {
    /// Target employee.
    pub employee_id: Uuid,
    /// Leave type name.
    pub leave_type: String,
    /// Maximum leave days per calendar month.
    pub max_days_per_month: i32,
    /// Maximum paid leave requests per year.
    pub max_paid_requests_per_year: i32,
    /// Reason for the override.
    pub reason: Option<String>,
    /// First day the override applies.
    pub effective_from: Option<NaiveDate>,
    /// Last day the override applies.
    pub effective_until: Option<NaiveDate>,
}

/// Correction request body (`PUT /employee-leave-limits/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLeaveLimitRequest {
    /// Maximum leave days per calendar month.
    pub max_days_per_month: i32,
    /// Maximum paid leave requests per year.
    pub max_paid_requests_per_year: i32,
    /// Reason for the override.
    pub reason: Option<String>,
    /// First day the override applies.
    pub effective_from: Option<NaiveDate>,
    /// Last day the override applies.
    pub effective_until: Option<NaiveDate>,
}

/// Filter query parameters for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveLimitFilterParams {
    /// Restrict to one employee.
    pub employee_id: Option<Uuid>,
    /// Restrict to one leave type.
    pub leave_type: Option<String>,
}
