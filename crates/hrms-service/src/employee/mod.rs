//! Employee read services.

pub mod service;

pub use service::EmployeeService;
