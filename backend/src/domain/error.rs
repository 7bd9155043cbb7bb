//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter decides which status
//! code each [`ErrorKind`] maps to and renders the [`ErrorEnvelope`].

use pagination::PageRequestError;
use serde::{Deserialize, Serialize};

use super::email::EmailValidationError;
use super::ports::EmailRepositoryError;

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request body is malformed or fails a presence check. Detected
    /// locally; the repository is never consulted.
    InvalidRequest,
    /// The data-access port reported a failure. Not-found, duplicate and
    /// connection failures are deliberately not told apart.
    Collaborator,
    /// The route exists but not for the request's HTTP method.
    MethodNotAllowed,
    /// The server failed to produce a response on its own side.
    Internal,
}

/// Error raised while handling a request.
///
/// # Examples
/// ```
/// use mailinglist::domain::{Error, ErrorKind};
///
/// let err = Error::invalid_request("Email field is required");
/// assert_eq!(err.kind(), ErrorKind::InvalidRequest);
/// assert_eq!(err.envelope().err, "Email field is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Create an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorKind::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorKind::Collaborator`].
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Collaborator, message)
    }

    /// Convenience constructor for [`ErrorKind::MethodNotAllowed`].
    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodNotAllowed, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Wire representation of this error.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            err: self.message.clone(),
        }
    }
}

impl From<EmailRepositoryError> for Error {
    fn from(err: EmailRepositoryError) -> Self {
        Self::collaborator(err.to_string())
    }
}

impl From<EmailValidationError> for Error {
    fn from(err: EmailValidationError) -> Self {
        Self::invalid_request(err.to_string())
    }
}

impl From<PageRequestError> for Error {
    fn from(err: PageRequestError) -> Self {
        Self::invalid_request(err.to_string())
    }
}

/// JSON body returned for every failed request: `{"Err": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "Err")]
    pub err: String,
}
