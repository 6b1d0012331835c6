//! Store errors shared by the category and product repositories.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error")]
    Sql(#[source] Error),

    #[error("storage connection closed")]
    Cancelled,

    #[error("timed out waiting for a storage connection")]
    DeadlineExceeded,
}

impl From<Error> for StoreError {
    fn from(error: Error) -> Self {
        match error {
            Error::PoolClosed => Self::Cancelled,
            Error::PoolTimedOut => Self::DeadlineExceeded,
            other => Self::Sql(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_closed_is_cancelled() {
        assert!(matches!(
            StoreError::from(Error::PoolClosed),
            StoreError::Cancelled
        ));
    }

    #[test]
    fn pool_timeout_is_deadline_exceeded() {
        assert!(matches!(
            StoreError::from(Error::PoolTimedOut),
            StoreError::DeadlineExceeded
        ));
    }

    #[test]
    fn row_not_found_stays_sql() {
        assert!(matches!(
            StoreError::from(Error::RowNotFound),
            StoreError::Sql(Error::RowNotFound)
        ));
    }
}
