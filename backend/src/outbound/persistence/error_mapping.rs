//! Shared Diesel and pool error mapping for the document repositories.
//!
//! Each repository passes its own port error constructors so the mapping
//! lives in one place while errors stay port specific.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map a Diesel error into a query or connection error.
///
/// The driver's message is kept verbatim so it reaches the failure
/// envelope.
pub(crate) fn map_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    operation: &'static str,
    query: Q,
    connection: C,
) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(error = %error, %operation, "diesel operation failed"),
    }

    let message = error.to_string();
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => connection(message),
        _ => query(message),
    }
}

#[cfg(test)]
mod tests {
    use diesel::result::Error as DieselError;
    use rstest::rstest;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    #[rstest]
    fn pool_errors_become_connection_errors() {
        let mapped = map_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".into()));
    }

    #[rstest]
    fn diesel_errors_keep_their_message() {
        let mapped = map_diesel_error(
            DieselError::NotFound,
            "find hobby",
            Mapped::Query,
            Mapped::Connection,
        );
        assert_eq!(mapped, Mapped::Query(DieselError::NotFound.to_string()));
    }

    #[rstest]
    fn broken_transaction_manager_is_a_connection_error() {
        let mapped = map_diesel_error(
            DieselError::BrokenTransactionManager,
            "update user",
            Mapped::Query,
            Mapped::Connection,
        );
        assert!(matches!(mapped, Mapped::Connection(_)));
    }
}
