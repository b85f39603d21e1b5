//! Leave limit override store — validation, upsert, and resolution policy.

pub mod service;
pub mod validation;

pub use service::{ExpandedLeaveLimit, LeaveLimitService};
pub use validation::{SaveLeaveLimit, UpdateLeaveLimit};
