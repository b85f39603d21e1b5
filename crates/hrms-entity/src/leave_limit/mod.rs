//! Per-employee leave limit override entity and resolution policy.

pub mod model;

pub use model::{LeaveLimitChanges, LeaveLimitOverride, NewLeaveLimit, resolve_effective};
