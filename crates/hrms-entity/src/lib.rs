//! # hrms-entity
//!
//! Domain entity models for the HRMS leave-limit service. Every struct in
//! this crate represents a database table row or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod employee;
pub mod leave_limit;
pub mod user;
