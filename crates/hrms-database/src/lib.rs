//! # hrms-database
//!
//! PostgreSQL access for the HRMS leave-limit service: connection pool
//! management, the migration runner, and concrete repository
//! implementations over `sqlx`.
//!
//! Repositories own the persistence mechanics only; the resolution and
//! upsert policy lives in `hrms-service`.

pub mod connection;
pub mod migration;
pub mod repositories;
