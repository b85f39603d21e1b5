//! # hrms-service
//!
//! Business logic for the HRMS leave-limit service. The leave-limit store
//! policy (validation, one-active-override-per-pair upsert, effective-limit
//! resolution, soft delete) lives here, on top of the repositories in
//! `hrms-database`.

pub mod employee;
pub mod leave_limit;
