//! Shared sqlx error mapping for catalogue repositories.

use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::CatalogueRepositoryError;

/// Map pool errors onto the repository connection error.
///
/// The pool message can name hosts and transports, so it is only logged.
pub(crate) fn map_pool_error(error: PoolError) -> CatalogueRepositoryError {
    debug!(%error, "store connection checkout failed");
    CatalogueRepositoryError::connection("database connection error")
}

/// Map sqlx errors: transport failures become connection errors, everything
/// else (statement, decode, constraint) becomes a query error.
///
/// Store messages are logged at debug level and replaced with fixed text so
/// schema details do not travel further than the adapter.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> CatalogueRepositoryError {
    match &error {
        sqlx::Error::Database(db) => {
            debug!(code = ?db.code(), message = db.message(), "sqlx operation failed");
        }
        other => debug!(error = %other, "sqlx operation failed"),
    }

    match error {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            CatalogueRepositoryError::connection("database connection error")
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            CatalogueRepositoryError::query("database row decode error")
        }
        _ => CatalogueRepositoryError::query("database error"),
    }
}
