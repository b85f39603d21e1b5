//! Leave limit payloads and field validation.
//!
//! Validation accumulates messages for every failing field into a
//! [`FieldErrors`] map rather than stopping at the first failure, so a
//! single response can show the form everything that needs fixing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use hrms_core::error::FieldErrors;

/// Payload for creating or updating an override through the upsert path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveLeaveLimit {
    /// The employee the override applies to.
    pub employee_id: Uuid,
    /// Leave type name.
    #[validate(length(min = 1, max = 255, message = "Leave type is required"))]
    pub leave_type: String,
    /// Maximum leave days per calendar month.
    #[validate(range(min = 0, max = 31, message = "Max days per month must be between 0 and 31"))]
    pub max_days_per_month: i32,
    /// Maximum paid leave requests per year.
    #[validate(range(
        min = 0,
        max = 12,
        message = "Max paid requests per year must be between 0 and 12"
    ))]
    pub max_paid_requests_per_year: i32,
    /// Reason for the override.
    #[validate(length(max = 500, message = "Reason must not exceed 500 characters"))]
    pub reason: Option<String>,
    /// First day the override applies.
    pub effective_from: Option<NaiveDate>,
    /// Last day the override applies.
    pub effective_until: Option<NaiveDate>,
}

/// Payload for correcting the limit fields of an existing override.
///
/// The identity of the record (employee, leave type) and its active status
/// cannot be changed through this payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLeaveLimit {
    /// Maximum leave days per calendar month.
    #[validate(range(min = 0, max = 31, message = "Max days per month must be between 0 and 31"))]
    pub max_days_per_month: i32,
    /// Maximum paid leave requests per year.
    #[validate(range(
        min = 0,
        max = 12,
        message = "Max paid requests per year must be between 0 and 12"
    ))]
    pub max_paid_requests_per_year: i32,
    /// Reason for the override.
    #[validate(length(max = 500, message = "Reason must not exceed 500 characters"))]
    pub reason: Option<String>,
    /// First day the override applies.
    pub effective_from: Option<NaiveDate>,
    /// Last day the override applies.
    pub effective_until: Option<NaiveDate>,
}

/// Flatten `validator` errors into the field → messages map.
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = fields.entry(field.to_string()).or_default();
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            messages.push(message);
        }
    }
    fields
}

/// Cross-field check: the effective window must not end before it starts.
///
/// Reported under `effective_until`, matching where the form shows it.
pub fn check_date_order(
    effective_from: Option<NaiveDate>,
    effective_until: Option<NaiveDate>,
    fields: &mut FieldErrors,
) {
    if let (Some(from), Some(until)) = (effective_from, effective_until) {
        if until < from {
            fields
                .entry("effective_until".to_string())
                .or_default()
                .push("Effective until must not be earlier than effective from".to_string());
        }
    }
}
