//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters depend only on these traits; outbound adapters implement
//! them.

mod macros;
pub(crate) use macros::define_port_error;

mod email_repository;

#[cfg(test)]
pub use email_repository::MockEmailRepository;
pub use email_repository::{EmailRepository, EmailRepositoryError};
