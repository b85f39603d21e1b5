//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hrms_core::types::pagination::PageResponse;
use hrms_entity::employee::EmployeeProfile;
use hrms_entity::leave_limit::LeaveLimitOverride;
use hrms_service::leave_limit::ExpandedLeaveLimit;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable message (mutations only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    /// Creates a successful response with a message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data,
        }
    }
}

/// Simple message response (deletes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the request was successful.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a successful message response.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Pagination metadata block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number (1-based).
    pub current_page: u64,
    /// Last page number.
    pub last_page: u64,
    /// Items per page.
    pub per_page: u64,
    /// Total items across all pages.
    pub total: u64,
}

/// Paginated list envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Items in this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

impl<T: Serialize> PaginatedResponse<T> {
    /// Build the envelope from an internal page response.
    pub fn from_page(page: PageResponse<T>) -> Self {
        Self {
            success: true,
            pagination: PaginationMeta {
                current_page: page.page,
                last_page: page.total_pages,
                per_page: page.page_size,
                total: page.total_items,
            },
            data: page.items,
        }
    }
}

/// Employee identity summary for pickers and expansions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee primary key.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Company badge number.
    pub employee_id: String,
    /// Department name.
    pub department: Option<String>,
}

impl From<&EmployeeProfile> for EmployeeSummary {
    fn from(employee: &EmployeeProfile) -> Self {
        Self {
            id: employee.id,
            name: employee.full_name(),
            employee_id: employee.employee_code.clone(),
            department: employee.department.clone(),
        }
    }
}

/// Creator identity summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSummary {
    /// User primary key.
    pub id: Uuid,
    /// Display name.
    pub name: String,
}

/// Leave limit override for responses, with optional expanded identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveLimitResponse {
    /// Record identifier.
    pub id: Uuid,
    /// Employee reference.
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
    /// False once soft-deleted.
    pub is_active: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Expanded employee identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSummary>,
    /// Expanded creator identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatorSummary>,
}

impl From<LeaveLimitOverride> for LeaveLimitResponse {
    fn from(limit: LeaveLimitOverride) -> Self {
        Self {
            id: limit.id,
            employee_id: limit.employee_id,
            leave_type: limit.leave_type,
            max_days_per_month: limit.max_days_per_month,
            max_paid_requests_per_year: limit.max_paid_requests_per_year,
            reason: limit.reason,
            effective_from: limit.effective_from,
            effective_until: limit.effective_until,
            is_active: limit.is_active,
            created_at: limit.created_at,
            updated_at: limit.updated_at,
            employee: None,
            created_by: None,
        }
    }
}

impl From<ExpandedLeaveLimit> for LeaveLimitResponse {
    fn from(expanded: ExpandedLeaveLimit) -> Self {
        let employee = expanded.employee.as_ref().map(EmployeeSummary::from);
        let created_by = expanded.creator.as_ref().map(|user| CreatorSummary {
            id: user.id,
            name: user.name().to_string(),
        });

        let mut response = Self::from(expanded.limit);
        response.employee = employee;
        response.created_by = created_by;
        response
    }
}

/// Body of `GET /employee-leave-limits/employee/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeLimitsResponse {
    /// Employee identity summary.
    pub employee: EmployeeSummary,
    /// Currently-effective overrides, ordered by leave type.
    pub limits: Vec<LeaveLimitResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status.
    pub database: String,
}
