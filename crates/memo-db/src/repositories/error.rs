//! Database error translation

use memo_core::DomainError;

/// Translate an SQLx error into a domain error
///
/// The database detail stays in the log; callers only see an opaque
/// database failure.
pub(crate) fn map_db_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "database operation failed");
    DomainError::DatabaseError(err.to_string())
}
