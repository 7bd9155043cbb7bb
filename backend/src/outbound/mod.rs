//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **memory**: process-local repository for tests and database-less runs
//!
//! Adapters are thin translators between domain types and storage
//! representations. They contain no request handling logic.

pub mod memory;
pub mod persistence;
