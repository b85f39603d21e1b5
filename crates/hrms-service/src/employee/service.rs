//! Employee lookups for the leave-limit screens.

use std::sync::Arc;

use hrms_core::result::AppResult;
use hrms_database::repositories::employee::EmployeeRepository;
use hrms_entity::employee::EmployeeProfile;

/// Read-only employee queries backing the UI pickers.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    employee_repo: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(employee_repo: Arc<EmployeeRepository>) -> Self {
        Self { employee_repo }
    }

    /// All employees ordered by first name, for dropdown selection.
    pub async fn list_for_picker(&self) -> AppResult<Vec<EmployeeProfile>> {
        self.employee_repo.find_all().await
    }
}
