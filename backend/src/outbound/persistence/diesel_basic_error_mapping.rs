//! Diesel and pool error mapping into `EmailRepositoryError`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::EmailRepositoryError;

use super::pool::PoolError;

/// Map pool errors to connection errors.
pub(super) fn map_pool_error(error: PoolError) -> EmailRepositoryError {
    EmailRepositoryError::connection(error.message())
}

/// Map Diesel errors to query or connection errors.
///
/// Driver messages are logged at debug level and replaced with fixed strings
/// so SQL details never reach clients.
pub(super) fn map_diesel_error(error: DieselError) -> EmailRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => EmailRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => EmailRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmailRepositoryError::connection("database connection error")
        }
        _ => EmailRepositoryError::query("database error"),
    }
}

/// Map insert failures, reporting unique violations on `email` as
/// duplicates.
pub(super) fn map_insert_error(error: DieselError, email: &str) -> EmailRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            debug!(email, "insert rejected by unique constraint");
            EmailRepositoryError::duplicate(email)
        }
        other => map_diesel_error(other),
    }
}
