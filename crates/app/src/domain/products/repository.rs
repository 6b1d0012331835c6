//! Products Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::{
    database::{Db, decode_object_id},
    domain::{
        categories::records::{CategoryId, CategorySnippet},
        errors::StoreError,
        products::{
            data::{NamePattern, ProductFilter, Window},
            records::{ProductRecord, ProductRecordPage, ProductWithCategory},
        },
    },
};

const COUNT_PRODUCTS_SQL: &str = include_str!("sql/count_products.sql");
const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Count and window the filtered listing inside one snapshot.
    #[tracing::instrument(
        name = "products.repository.page",
        skip(self),
        fields(total = tracing::field::Empty, returned = tracing::field::Empty),
        err
    )]
    async fn page(
        &self,
        filter: ProductFilter,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError> {
        let category = filter.category_param();
        let name = filter.name_param();

        let mut tx = self.db.begin_read_snapshot().await?;

        let total: i64 = query_scalar(COUNT_PRODUCTS_SQL)
            .bind(category.clone())
            .bind(name.clone())
            .fetch_one(&mut *tx)
            .await?;

        let rows = query_as::<Postgres, ProductWithCategory>(LIST_PRODUCTS_SQL)
            .bind(category)
            .bind(name)
            .bind(i64::from(window.start))
            .bind(i64::from(window.qty))
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let total = u64::try_from(total).map_err(|source| sqlx::Error::ColumnDecode {
            index: "count".to_string(),
            source: Box::new(source),
        })?;

        tracing::Span::current().record("total", total);
        tracing::Span::current().record("returned", rows.len());

        Ok(ProductRecordPage { total, rows })
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn list_products(&self, window: Window) -> Result<ProductRecordPage, StoreError> {
        self.page(ProductFilter::All, window).await
    }

    async fn list_products_by_category(
        &self,
        category: CategoryId,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError> {
        self.page(ProductFilter::Category(category), window).await
    }

    async fn search_products(
        &self,
        pattern: NamePattern,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError> {
        self.page(ProductFilter::NameMatches(pattern), window).await
    }
}

impl<'r> FromRow<'r, PgRow> for ProductWithCategory {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let category_id: CategoryId = decode_object_id(row.try_get("category_id")?, "category_id")?;

        let category_name: Option<String> = row.try_get("category_name")?;
        let category_slug: Option<String> = row.try_get("category_slug")?;

        let category = category_name
            .zip(category_slug)
            .map(|(name, slug)| CategorySnippet {
                id: category_id,
                name,
                slug,
            });

        Ok(Self {
            product: ProductRecord {
                id: decode_object_id(row.try_get("id")?, "id")?,
                name: row.try_get("name")?,
                slug: row.try_get("slug")?,
                quantity: row.try_get("quantity")?,
                value: row.try_get::<Decimal, _>("value")?,
                category: category_id,
                last_updated: row.try_get::<SqlxTimestamp, _>("last_updated")?.to_jiff(),
            },
            category,
        })
    }
}

/// Product Store
///
/// Every listing filters, sorts by name, counts the full match set and then
/// windows it. Rows carry their joined category when it resolves.
#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// All products.
    async fn list_products(&self, window: Window) -> Result<ProductRecordPage, StoreError>;

    /// Products assigned to `category`. An unknown category yields an empty page.
    async fn list_products_by_category(
        &self,
        category: CategoryId,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError>;

    /// Products whose name matches `pattern`.
    async fn search_products(
        &self,
        pattern: NamePattern,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError>;
}
