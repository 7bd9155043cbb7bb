//! PostgreSQL persistence adapter using Diesel ORM.
//!
//! Provides the `EmailRepository` implementation backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling.
//!
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   private to this module; only domain types cross the boundary.
//! - Every Diesel or pool failure is mapped to an `EmailRepositoryError`.
//!
//! # Example
//!
//! ```ignore
//! use mailinglist::outbound::persistence::{
//!     DbPool, DieselEmailRepository, PoolConfig, run_migrations,
//! };
//!
//! run_migrations("postgres://localhost/mailinglist").await?;
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/mailinglist")).await?;
//! let repo = DieselEmailRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_email_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_email_repository::DieselEmailRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};
