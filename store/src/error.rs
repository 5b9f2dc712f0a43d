//! Error types for the query pipeline

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Query execution failed: {0}")]
    Execution(#[source] sqlx::Error),

    #[error("Failed to read row: {0}")]
    Scan(#[source] sqlx::Error),

    #[error("Timestamp out of range for the wire format: {seconds}s {nanos}ns")]
    TimestampConversion { seconds: i64, nanos: u32 },

    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(i32),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True for errors caused by the request rather than the store.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidSortField(_) | StoreError::InvalidSortDirection(_)
        )
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => StoreError::Scan(err),
            other => StoreError::Execution(other),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_classify_as_scan() {
        let err: StoreError = sqlx::Error::ColumnNotFound("name".to_string()).into();
        assert!(matches!(err, StoreError::Scan(_)));
    }

    #[test]
    fn other_errors_classify_as_execution() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Execution(_)));

        let err: StoreError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StoreError::Execution(_)));
    }

    #[test]
    fn sort_errors_are_invalid_requests() {
        assert!(StoreError::InvalidSortField("drop".to_string()).is_invalid_request());
        assert!(StoreError::InvalidSortDirection(7).is_invalid_request());
        assert!(!StoreError::Migration("boom".to_string()).is_invalid_request());
    }
}
