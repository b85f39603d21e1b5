//! Leave limit store operations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use hrms_core::error::{AppError, FieldErrors};
use hrms_core::result::AppResult;
use hrms_core::types::pagination::{PageRequest, PageResponse};
use hrms_database::repositories::employee::EmployeeRepository;
use hrms_database::repositories::leave_limit::{LeaveLimitFilter, LeaveLimitRepository};
use hrms_database::repositories::user::UserRepository;
use hrms_entity::employee::EmployeeProfile;
use hrms_entity::leave_limit::{
    LeaveLimitChanges, LeaveLimitOverride, NewLeaveLimit, resolve_effective,
};
use hrms_entity::user::User;

use super::validation::{SaveLeaveLimit, UpdateLeaveLimit, check_date_order, collect_field_errors};

/// An override together with its expanded employee and creator identities,
/// as the admin screens render it.
#[derive(Debug, Clone, Serialize)]
pub struct ExpandedLeaveLimit {
    /// The override record.
    pub limit: LeaveLimitOverride,
    /// The employee the override applies to.
    pub employee: Option<EmployeeProfile>,
    /// The HR user who last saved it.
    pub creator: Option<User>,
}

/// Leave limit store — owns the override resolution and upsert rules.
///
/// At most one record per (employee, leave type) pair should be active at a
/// time. That is enforced by the read-then-write in [`upsert`], not by a
/// database constraint, so concurrent writers can still race into duplicate
/// active rows; [`resolve_effective_limit`] tie-breaks on the newest
/// `created_at` to stay deterministic in that case.
///
/// [`upsert`]: LeaveLimitService::upsert
/// [`resolve_effective_limit`]: LeaveLimitService::resolve_effective_limit
#[derive(Debug, Clone)]
pub struct LeaveLimitService {
    limit_repo: Arc<LeaveLimitRepository>,
    employee_repo: Arc<EmployeeRepository>,
    user_repo: Arc<UserRepository>,
}

impl LeaveLimitService {
    /// Creates a new leave limit service.
    pub fn new(
        limit_repo: Arc<LeaveLimitRepository>,
        employee_repo: Arc<EmployeeRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            limit_repo,
            employee_repo,
            user_repo,
        }
    }

    /// The override in force for an employee and leave type on `today`.
    ///
    /// `None` is the normal "no custom override, fall back to the default
    /// policy" case, not an error.
    pub async fn resolve_effective_limit(
        &self,
        employee_id: Uuid,
        leave_type: &str,
        today: NaiveDate,
    ) -> AppResult<Option<LeaveLimitOverride>> {
        let candidates = self
            .limit_repo
            .find_active_for_pair(employee_id, leave_type)
            .await?;
        Ok(resolve_effective(&candidates, today).cloned())
    }

    /// Create or update the override for (employee, leave type).
    ///
    /// Matches any active row for the pair, even one outside its effective
    /// window: a second override for the same pair merges into the existing
    /// row instead of creating parallel history. `id` and `created_at` are
    /// preserved on the update path; `created_by` becomes the acting user
    /// either way.
    pub async fn upsert(
        &self,
        payload: SaveLeaveLimit,
        actor: Option<Uuid>,
    ) -> AppResult<LeaveLimitOverride> {
        let mut fields = match payload.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => collect_field_errors(&errors),
        };
        check_date_order(payload.effective_from, payload.effective_until, &mut fields);

        if self
            .employee_repo
            .find_by_id(payload.employee_id)
            .await?
            .is_none()
        {
            fields
                .entry("employee_id".to_string())
                .or_default()
                .push("The selected employee does not exist".to_string());
        }

        if !fields.is_empty() {
            return Err(AppError::validation_fields(fields));
        }

        let existing = self
            .limit_repo
            .find_active_for_pair(payload.employee_id, &payload.leave_type)
            .await?;

        let changes = LeaveLimitChanges {
            max_days_per_month: payload.max_days_per_month,
            max_paid_requests_per_year: payload.max_paid_requests_per_year,
            reason: payload.reason.clone(),
            effective_from: payload.effective_from,
            effective_until: payload.effective_until,
        };

        // Newest first; extra rows can exist if concurrent upserts raced.
        let limit = if let Some(current) = existing.first() {
            let updated = self
                .limit_repo
                .update_limits_and_creator(current.id, &changes, actor)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(format!("Leave limit {} not found", current.id))
                })?;
            info!(
                limit_id = %updated.id,
                employee_id = %updated.employee_id,
                leave_type = %updated.leave_type,
                "Leave limit override updated"
            );
            updated
        } else {
            let created = self
                .limit_repo
                .insert(&NewLeaveLimit {
                    employee_id: payload.employee_id,
                    leave_type: payload.leave_type,
                    max_days_per_month: payload.max_days_per_month,
                    max_paid_requests_per_year: payload.max_paid_requests_per_year,
                    reason: payload.reason,
                    effective_from: payload.effective_from,
                    effective_until: payload.effective_until,
                    created_by: actor,
                })
                .await?;
            info!(
                limit_id = %created.id,
                employee_id = %created.employee_id,
                leave_type = %created.leave_type,
                "Leave limit override created"
            );
            created
        };

        Ok(limit)
    }

    /// Correct the limit fields of an existing override.
    ///
    /// Never changes the employee, leave type, active status, or
    /// `created_by`; fails with NotFound when the id does not exist.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateLeaveLimit,
        actor: Option<Uuid>,
    ) -> AppResult<LeaveLimitOverride> {
        let mut fields = match payload.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => collect_field_errors(&errors),
        };
        check_date_order(payload.effective_from, payload.effective_until, &mut fields);

        if !fields.is_empty() {
            return Err(AppError::validation_fields(fields));
        }

        let updated = self
            .limit_repo
            .update_limits(
                id,
                &LeaveLimitChanges {
                    max_days_per_month: payload.max_days_per_month,
                    max_paid_requests_per_year: payload.max_paid_requests_per_year,
                    reason: payload.reason,
                    effective_from: payload.effective_from,
                    effective_until: payload.effective_until,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found(format!("Leave limit {id} not found")))?;

        info!(limit_id = %id, actor = ?actor, "Leave limit override corrected");
        Ok(updated)
    }

    /// Soft-delete an override by flipping `is_active` off.
    ///
    /// Deleting an already-inactive record succeeds silently; only an
    /// unknown id is an error. The row itself is preserved for history.
    pub async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        self.limit_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Leave limit {id} not found")))?;

        self.limit_repo.set_inactive(id).await?;
        info!(limit_id = %id, "Leave limit override deactivated");
        Ok(())
    }

    /// Page through active overrides, newest first.
    ///
    /// Includes rows outside their effective window; the admin table shows
    /// upcoming and expired overrides alongside current ones. Employee and
    /// creator identities are expanded for display.
    pub async fn list(
        &self,
        filter: &LeaveLimitFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ExpandedLeaveLimit>> {
        let page_response = self.limit_repo.find_all(filter, page).await?;

        let (meta_page, meta_size, meta_total) = (
            page_response.page,
            page_response.page_size,
            page_response.total_items,
        );
        let expanded = self.expand(page_response.items).await?;

        Ok(PageResponse::new(expanded, meta_page, meta_size, meta_total))
    }

    /// Expand a single override (used after a write).
    pub async fn expand_one(&self, limit: LeaveLimitOverride) -> AppResult<ExpandedLeaveLimit> {
        let mut expanded = self.expand(vec![limit]).await?;
        expanded
            .pop()
            .ok_or_else(|| AppError::internal("Expansion dropped the record"))
    }

    /// Batch-attach employee and creator identities to override rows.
    async fn expand(
        &self,
        limits: Vec<LeaveLimitOverride>,
    ) -> AppResult<Vec<ExpandedLeaveLimit>> {
        let mut employee_ids: Vec<Uuid> = limits.iter().map(|l| l.employee_id).collect();
        employee_ids.sort_unstable();
        employee_ids.dedup();

        let mut user_ids: Vec<Uuid> = limits.iter().filter_map(|l| l.created_by).collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let employees: HashMap<Uuid, EmployeeProfile> = self
            .employee_repo
            .find_by_ids(&employee_ids)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        let users: HashMap<Uuid, User> = self
            .user_repo
            .find_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(limits
            .into_iter()
            .map(|limit| {
                let employee = employees.get(&limit.employee_id).cloned();
                let creator = limit.created_by.and_then(|id| users.get(&id).cloned());
                ExpandedLeaveLimit {
                    limit,
                    employee,
                    creator,
                }
            })
            .collect())
    }

    /// The employee's identity plus their currently-effective overrides,
    /// ordered by leave type.
    pub async fn get_for_employee(
        &self,
        employee_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<(EmployeeProfile, Vec<LeaveLimitOverride>)> {
        let employee = self
            .employee_repo
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {employee_id} not found")))?;

        let mut limits = self.limit_repo.find_active_for_employee(employee_id).await?;
        limits.retain(|limit| limit.is_currently_effective(today));

        Ok((employee, limits))
    }
}
