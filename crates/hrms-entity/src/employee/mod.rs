//! Employee profile entity.

pub mod model;

pub use model::EmployeeProfile;
