//! Leave limit override entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A per-employee override of the default leave policy for one leave type.
///
/// When present and currently effective, this takes priority over the
/// company-wide defaults. Rows are never hard-deleted: deactivation flips
/// `is_active` and a later override for the same pair creates a fresh row,
/// so history accumulates as a chain of active/inactive records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveLimitOverride {
    /// Unique record identifier.
    pub id: Uuid,
    /// The employee whose limit is overridden.
    pub employee_id: Uuid,
    /// Leave type name this override applies to.
    pub leave_type: String,
    /// Maximum leave days per calendar month.
    pub max_days_per_month: i32,
    /// Maximum paid leave requests per year.
    pub max_paid_requests_per_year: i32,
    /// Reason for the override.
    pub reason: Option<String>,
    /// First day the override applies; absent means effective from the start.
    pub effective_from: Option<NaiveDate>,
    /// Last day the override applies; absent means it never expires.
    pub effective_until: Option<NaiveDate>,
    /// False once the override has been soft-deleted.
    pub is_active: bool,
    /// The HR user who last saved this override.
    pub created_by: Option<Uuid>,
    /// When the override was created.
    pub created_at: DateTime<Utc>,
    /// When the override was last updated.
    pub updated_at: DateTime<Utc>,
}

impl LeaveLimitOverride {
    /// Check whether this override is in force on the given day.
    ///
    /// True iff the record is active and `today` falls inside the optional
    /// effective window. An absent `effective_from` means "from the start";
    /// an absent `effective_until` means "never expires".
    pub fn is_currently_effective(&self, today: NaiveDate) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(from) = self.effective_from {
            if from > today {
                return false;
            }
        }
        if let Some(until) = self.effective_until {
            if until < today {
                return false;
            }
        }
        true
    }
}

/// Pick the override in force on `today` from a set of candidate rows.
///
/// Activeness is not uniquely enforced at the database level, so more than
/// one candidate can qualify; the tie-break picks the most recently created
/// row.
pub fn resolve_effective(
    candidates: &[LeaveLimitOverride],
    today: NaiveDate,
) -> Option<&LeaveLimitOverride> {
    candidates
        .iter()
        .filter(|limit| limit.is_currently_effective(today))
        .max_by_key(|limit| limit.created_at)
}

/// Data required to create a new leave limit override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLeaveLimit {
    /// The employee the override applies to.
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
    /// The acting HR user.
    pub created_by: Option<Uuid>,
}

/// The mutable limit fields of an existing override.
///
/// Identity fields (`employee_id`, `leave_type`) and `is_active` are never
/// changed through this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveLimitChanges {
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
