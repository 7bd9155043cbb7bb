//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on the repository port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmailRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub emails: Arc<dyn EmailRepository>,
}

impl HttpState {
    /// Build state around a repository implementation.
    pub fn new(emails: Arc<dyn EmailRepository>) -> Self {
        Self { emails }
    }
}
