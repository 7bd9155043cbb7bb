//! Domain primitives and ports.
//!
//! Purpose: define the mailing-list entry types and the repository port the
//! HTTP adapter delegates to. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - `EmailEntry`, `EmailAddress`: the subscriber record and its key.
//! - `Error`, `ErrorKind`, `ErrorEnvelope`: transport-agnostic failures and
//!   their `{"Err": ...}` wire shape.
//! - `ports::EmailRepository`: the data-access collaborator.

pub mod email;
pub mod error;
pub mod ports;

pub use self::email::{EmailAddress, EmailEntry, EmailValidationError};
pub use self::error::{Error, ErrorEnvelope, ErrorKind};
