//! Leave limit override repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_core::types::pagination::{PageRequest, PageResponse};
use hrms_entity::leave_limit::{LeaveLimitChanges, LeaveLimitOverride, NewLeaveLimit};

/// Optional filters for listing leave limit overrides.
#[derive(Debug, Clone, Default)]
pub struct LeaveLimitFilter {
    /// Restrict to one employee.
    pub employee_id: Option<Uuid>,
    /// Restrict to one leave type.
    pub leave_type: Option<String>,
}

/// Repository for leave limit override persistence.
///
/// Exposes single-row reads and writes only; which row to write (the
/// one-active-override-per-pair policy) is decided by the service layer.
#[derive(Debug, Clone)]
pub struct LeaveLimitRepository {
    pool: PgPool,
}

impl LeaveLimitRepository {
    /// Create a new leave limit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an override by primary key, active or not.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<LeaveLimitOverride>> {
        sqlx::query_as::<_, LeaveLimitOverride>(
            "SELECT * FROM employee_leave_limits WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find leave limit by id", e)
        })
    }

    /// All active overrides for one (employee, leave type) pair, newest first.
    ///
    /// The effective-date window is deliberately not filtered here: the
    /// upsert policy matches any active row, in or out of its window.
    pub async fn find_active_for_pair(
        &self,
        employee_id: Uuid,
        leave_type: &str,
    ) -> AppResult<Vec<LeaveLimitOverride>> {
        sqlx::query_as::<_, LeaveLimitOverride>(
            "SELECT * FROM employee_leave_limits \
             WHERE employee_id = $1 AND leave_type = $2 AND is_active = TRUE \
             ORDER BY created_at DESC",
        )
        .bind(employee_id)
        .bind(leave_type)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to find leave limits for employee and type",
                e,
            )
        })
    }

    /// All active overrides for an employee, ordered by leave type.
    pub async fn find_active_for_employee(
        &self,
        employee_id: Uuid,
    ) -> AppResult<Vec<LeaveLimitOverride>> {
        sqlx::query_as::<_, LeaveLimitOverride>(
            "SELECT * FROM employee_leave_limits \
             WHERE employee_id = $1 AND is_active = TRUE \
             ORDER BY leave_type ASC",
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list leave limits for employee",
                e,
            )
        })
    }

    /// List active overrides with optional filters, newest first.
    pub async fn find_all(
        &self,
        filter: &LeaveLimitFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<LeaveLimitOverride>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employee_leave_limits \
             WHERE is_active = TRUE \
               AND ($1::uuid IS NULL OR employee_id = $1) \
               AND ($2::text IS NULL OR leave_type = $2)",
        )
        .bind(filter.employee_id)
        .bind(filter.leave_type.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count leave limits", e)
        })?;

        let limits = sqlx::query_as::<_, LeaveLimitOverride>(
            "SELECT * FROM employee_leave_limits \
             WHERE is_active = TRUE \
               AND ($1::uuid IS NULL OR employee_id = $1) \
               AND ($2::text IS NULL OR leave_type = $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(filter.employee_id)
        .bind(filter.leave_type.as_deref())
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list leave limits", e)
        })?;

        Ok(PageResponse::new(
            limits,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new active override.
    pub async fn insert(&self, data: &NewLeaveLimit) -> AppResult<LeaveLimitOverride> {
        sqlx::query_as::<_, LeaveLimitOverride>(
            "INSERT INTO employee_leave_limits \
                 (employee_id, leave_type, max_days_per_month, max_paid_requests_per_year, \
                  reason, effective_from, effective_until, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.employee_id)
        .bind(&data.leave_type)
        .bind(data.max_days_per_month)
        .bind(data.max_paid_requests_per_year)
        .bind(&data.reason)
        .bind(data.effective_from)
        .bind(data.effective_until)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert leave limit", e)
        })
    }

    /// Overwrite the limit fields of an existing override.
    ///
    /// Identity fields, `is_active`, and `created_by` are untouched.
    /// Returns `None` when no row has the given id.
    pub async fn update_limits(
        &self,
        id: Uuid,
        changes: &LeaveLimitChanges,
    ) -> AppResult<Option<LeaveLimitOverride>> {
        sqlx::query_as::<_, LeaveLimitOverride>(
            "UPDATE employee_leave_limits SET \
                 max_days_per_month = $2, \
                 max_paid_requests_per_year = $3, \
                 reason = $4, \
                 effective_from = $5, \
                 effective_until = $6, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(changes.max_days_per_month)
        .bind(changes.max_paid_requests_per_year)
        .bind(&changes.reason)
        .bind(changes.effective_from)
        .bind(changes.effective_until)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update leave limit", e)
        })
    }

    /// Overwrite the limit fields and reassign `created_by` (upsert path).
    ///
    /// `id` and `created_at` are preserved, so the row keeps its place in
    /// the history chain.
    pub async fn update_limits_and_creator(
        &self,
        id: Uuid,
        changes: &LeaveLimitChanges,
        created_by: Option<Uuid>,
    ) -> AppResult<Option<LeaveLimitOverride>> {
        sqlx::query_as::<_, LeaveLimitOverride>(
            "UPDATE employee_leave_limits SET \
                 max_days_per_month = $2, \
                 max_paid_requests_per_year = $3, \
                 reason = $4, \
                 effective_from = $5, \
                 effective_until = $6, \
                 created_by = $7, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(changes.max_days_per_month)
        .bind(changes.max_paid_requests_per_year)
        .bind(&changes.reason)
        .bind(changes.effective_from)
        .bind(changes.effective_until)
        .bind(created_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update leave limit", e)
        })
    }

    /// Deactivate an override.
    ///
    /// Already-inactive rows are matched too, so a repeated delete succeeds.
    pub async fn set_inactive(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE employee_leave_limits SET is_active = FALSE, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to deactivate leave limit", e)
        })?;
        Ok(())
    }
}
