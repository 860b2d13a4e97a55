//! Database pool setup and error classification for Tertulia
//!
//! Repositories surface every persistence failure through the shared
//! taxonomy: a row miss is NotFound, a uniqueness-constraint violation is a
//! Validation signal (the storage layer is the authoritative backstop for
//! check-then-insert races), and everything else is Internal.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::Error;

/// Upper bound on concurrently open connections.
const MAX_CONNECTIONS: u32 = 10;

/// How long a request-scoped query may wait for a connection before it
/// surfaces as Internal rather than hanging.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);

/// Create the shared connection pool.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return Error::not_found(err);
        }
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return Error::bad_request("a value supplied for a unique field is already taken");
            }
        }
        Error::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Kind;

    #[test]
    fn test_row_not_found_classifies_as_not_found() {
        let error = Error::from(sqlx::Error::RowNotFound);
        assert_eq!(error.kind(), Kind::NotFound);
    }

    #[test]
    fn test_other_sqlx_errors_classify_as_internal() {
        let error = Error::from(sqlx::Error::PoolTimedOut);
        assert_eq!(error.kind(), Kind::Internal);
        // The original cause stays reachable for inspection.
        assert!(error
            .cause()
            .unwrap()
            .downcast_ref::<sqlx::Error>()
            .is_some());
    }
}
