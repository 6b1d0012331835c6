//! Database connection management

use sqlx::{Error, PgPool, Postgres, Transaction, query};

use crate::object_id::TypedObjectId;

/// Pins every statement of a request to one read-only snapshot, so a page and
/// its total count agree with each other.
pub const READ_SNAPSHOT_SQL: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a read-only snapshot transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or setting its mode fails.
    pub async fn begin_read_snapshot(&self) -> Result<Transaction<'static, Postgres>, Error> {
        let mut tx = self.pool.begin().await?;

        query(READ_SNAPSHOT_SQL).execute(&mut *tx).await?;

        Ok(tx)
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, Error> {
    PgPool::connect(database_url).await
}

/// Decode a stored hex identifier, reporting the offending column on failure.
pub(crate) fn decode_object_id<T>(value: &str, column: &str) -> Result<TypedObjectId<T>, Error> {
    value.parse().map_err(|source| Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    })
}

/// Decode a stored list of hex identifiers.
pub(crate) fn decode_object_ids<T>(
    values: &[String],
    column: &str,
) -> Result<Vec<TypedObjectId<T>>, Error> {
    values
        .iter()
        .map(|value| decode_object_id(value, column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn decode_object_id_reports_column() {
        let result = decode_object_id::<Marker>("nope", "category_id");

        assert!(
            matches!(&result, Err(Error::ColumnDecode { index, .. }) if index == "category_id"),
            "expected ColumnDecode, got {:?}",
            result.err()
        );
    }

    #[test]
    fn decode_object_ids_keeps_order() -> testresult::TestResult {
        let values = vec![
            "000000000000000000000002".to_string(),
            "000000000000000000000001".to_string(),
        ];

        let ids = decode_object_ids::<Marker>(&values, "ancestors")?;

        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();

        assert_eq!(rendered, values);

        Ok(())
    }
}
