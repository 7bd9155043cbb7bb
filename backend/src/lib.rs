//! Mailing-list service library.
//!
//! Layout follows ports and adapters: [`domain`] holds the entry model, the
//! error taxonomy and the [`domain::ports::EmailRepository`] port;
//! [`inbound`] exposes it over HTTP; [`outbound`] implements the port for
//! PostgreSQL and for a process-local map.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
pub use settings::ServerSettings;
