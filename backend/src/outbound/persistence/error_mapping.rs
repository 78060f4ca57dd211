//! Translation of pool and Diesel failures into [`StorageError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;
use crate::domain::ports::StorageError;

/// Pool failures mean the database is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> StorageError {
    StorageError::connection(error.message())
}

/// Map Diesel errors, keeping driver detail out of the message.
pub(crate) fn map_diesel_error(error: DieselError) -> StorageError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            StorageError::conflict(info.constraint_name().unwrap_or("unique constraint"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StorageError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => StorageError::query("database query error"),
        DieselError::DeserializationError(_) => StorageError::corrupt_row("undecodable column"),
        _ => StorageError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[derive(Debug)]
    struct Info(Option<&'static str>);

    impl diesel::result::DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            "duplicate key value"
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            Some("regional_capacity")
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            self.0
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, constraint: Option<&'static str>) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(constraint)))
    }

    #[rstest]
    fn pool_errors_map_to_connection() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert_eq!(err, StorageError::connection("connection refused"));
    }

    #[rstest]
    fn unique_violations_map_to_conflict() {
        let err = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            Some("regional_capacity_state_key"),
        ));
        assert_eq!(err, StorageError::conflict("regional_capacity_state_key"));
    }

    #[rstest]
    fn closed_connections_map_to_connection() {
        let err = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection, None));
        assert!(matches!(err, StorageError::Connection { .. }));
    }

    #[rstest]
    #[case(DieselError::NotFound)]
    #[case(DieselError::RollbackTransaction)]
    fn other_failures_map_to_query(#[case] error: DieselError) {
        assert!(matches!(map_diesel_error(error), StorageError::Query { .. }));
    }
}
