//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] transport agnostic while letting handlers return it
//! directly. Every failure except [`ErrorKind::Internal`] renders the
//! `{"Err": "..."}` envelope; internal failures produce a bare 500.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::domain::{Error, ErrorKind};

use super::body::json_response;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidRequest | ErrorKind::Collaborator => StatusCode::BAD_REQUEST,
        ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if matches!(self.kind(), ErrorKind::Internal) {
            return HttpResponse::build(status).finish();
        }
        json_response(status, &self.envelope())
    }
}

#[cfg(test)]
mod tests;
