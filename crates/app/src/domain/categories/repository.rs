//! Categories Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use rustc_hash::{FxHashMap, FxHashSet};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{Db, decode_object_id, decode_object_ids},
    domain::{
        categories::{
            adjacency::{Edge, resolve_edges},
            records::{
                CategoryId, CategoryRecord, CategorySnippet, CategoryWithAncestors,
                CategoryWithChildren,
            },
        },
        errors::StoreError,
    },
};

const LIST_ROOT_CATEGORIES_SQL: &str = include_str!("sql/list_root_categories.sql");
const GET_CATEGORY_SQL: &str = include_str!("sql/get_category.sql");
const LIST_CATEGORY_SNIPPETS_SQL: &str = include_str!("sql/list_category_snippets.sql");

#[derive(Debug, Clone)]
pub struct PgCategoriesRepository {
    db: Db,
}

impl PgCategoriesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    async fn get_category(
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryId,
    ) -> Result<Option<CategoryRecord>, sqlx::Error> {
        query_as::<Postgres, CategoryRecord>(GET_CATEGORY_SQL)
            .bind(category.to_hex())
            .fetch_optional(&mut **tx)
            .await
    }

    async fn snippets(
        tx: &mut Transaction<'_, Postgres>,
        ids: &FxHashSet<CategoryId>,
    ) -> Result<FxHashMap<CategoryId, CategorySnippet>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(FxHashMap::default());
        }

        let hex_ids: Vec<String> = ids.iter().map(CategoryId::to_hex).collect();

        let snippets = query_as::<Postgres, CategorySnippet>(LIST_CATEGORY_SNIPPETS_SQL)
            .bind(&hex_ids)
            .fetch_all(&mut **tx)
            .await?;

        Ok(snippets
            .into_iter()
            .map(|snippet| (snippet.id, snippet))
            .collect())
    }
}

#[async_trait]
impl CategoriesRepository for PgCategoriesRepository {
    #[tracing::instrument(
        name = "categories.repository.top_level_categories_with_children",
        skip(self),
        err
    )]
    async fn top_level_categories_with_children(
        &self,
    ) -> Result<Vec<CategoryWithChildren>, StoreError> {
        let mut tx = self.db.begin_read_snapshot().await?;

        let roots = query_as::<Postgres, CategoryRecord>(LIST_ROOT_CATEGORIES_SQL)
            .fetch_all(&mut *tx)
            .await?;

        let child_ids: FxHashSet<CategoryId> = roots
            .iter()
            .flat_map(|root| root.children.iter().copied())
            .collect();

        let snippets = Self::snippets(&mut tx, &child_ids).await?;

        tx.commit().await?;

        Ok(roots
            .into_iter()
            .map(|root| {
                let children = resolve_edges(root.id, Edge::Children, &root.children, |id| {
                    snippets.get(id).cloned()
                });

                CategoryWithChildren::new(root, children)
            })
            .collect())
    }

    #[tracing::instrument(
        name = "categories.repository.ancestor_chain",
        skip(self),
        fields(category = %category),
        err
    )]
    async fn ancestor_chain(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithAncestors>, StoreError> {
        let mut tx = self.db.begin_read_snapshot().await?;

        let Some(record) = Self::get_category(&mut tx, category).await? else {
            tx.commit().await?;

            return Ok(Vec::new());
        };

        let ancestor_ids: FxHashSet<CategoryId> = record.ancestors.iter().copied().collect();

        let snippets = Self::snippets(&mut tx, &ancestor_ids).await?;

        tx.commit().await?;

        let ancestors = resolve_edges(record.id, Edge::Ancestors, &record.ancestors, |id| {
            snippets.get(id).cloned()
        });

        Ok(vec![CategoryWithAncestors::new(record, ancestors)])
    }

    #[tracing::instrument(
        name = "categories.repository.direct_children",
        skip(self),
        fields(category = %category),
        err
    )]
    async fn direct_children(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithChildren>, StoreError> {
        let mut tx = self.db.begin_read_snapshot().await?;

        let Some(record) = Self::get_category(&mut tx, category).await? else {
            tx.commit().await?;

            return Ok(Vec::new());
        };

        let child_ids: FxHashSet<CategoryId> = record.children.iter().copied().collect();

        let snippets = Self::snippets(&mut tx, &child_ids).await?;

        tx.commit().await?;

        let children = resolve_edges(record.id, Edge::Children, &record.children, |id| {
            snippets.get(id).cloned()
        });

        Ok(vec![CategoryWithChildren::new(record, children)])
    }
}

impl<'r> FromRow<'r, PgRow> for CategoryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let ancestors: Vec<String> = row.try_get("ancestors")?;
        let children: Vec<String> = row.try_get("children")?;

        Ok(Self {
            id: decode_object_id(row.try_get("id")?, "id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            ancestors: decode_object_ids(&ancestors, "ancestors")?,
            children: decode_object_ids(&children, "children")?,
            last_updated: row.try_get::<SqlxTimestamp, _>("last_updated")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for CategorySnippet {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: decode_object_id(row.try_get("id")?, "id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
        })
    }
}

/// Category Store
///
/// Read-only traversal of the category hierarchy.
#[automock]
#[async_trait]
pub trait CategoriesRepository: Send + Sync {
    /// Root categories ordered by name, each with its direct children.
    async fn top_level_categories_with_children(
        &self,
    ) -> Result<Vec<CategoryWithChildren>, StoreError>;

    /// The category with its ancestors resolved, or an empty list when the
    /// category does not exist.
    async fn ancestor_chain(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithAncestors>, StoreError>;

    /// The category with its direct children resolved, or an empty list when
    /// the category does not exist.
    async fn direct_children(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithChildren>, StoreError>;
}
