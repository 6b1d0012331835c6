//! Catalog query service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use mockall::automock;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::{
        catalog::{
            errors::CatalogError,
            models::{CategoryWithAncestors, CategoryWithChildren, ProductPage},
        },
        categories::{CategoriesRepository, PgCategoriesRepository, records::CategoryId},
        errors::StoreError,
        products::{
            PgProductsRepository, ProductsRepository,
            data::{NamePattern, Window},
        },
    },
    memory::MemoryCatalog,
};

/// Upper bound on a single store call unless configured otherwise.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct CatalogQueryService {
    categories: Arc<dyn CategoriesRepository>,
    products: Arc<dyn ProductsRepository>,
    query_timeout: Duration,
}

impl CatalogQueryService {
    #[must_use]
    pub fn new(
        categories: Arc<dyn CategoriesRepository>,
        products: Arc<dyn ProductsRepository>,
    ) -> Self {
        Self {
            categories,
            products,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Postgres-backed stores sharing one pool.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self::new(
            Arc::new(PgCategoriesRepository::new(db.clone())),
            Arc::new(PgProductsRepository::new(db)),
        )
    }

    /// Both stores served from one in-memory snapshot.
    #[must_use]
    pub fn from_memory(catalog: MemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);

        Self::new(catalog.clone(), catalog)
    }

    #[must_use]
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Run a store call under the query deadline. On expiry the call is
    /// dropped, abandoning any in-flight I/O.
    async fn bounded<T, F>(&self, operation: &'static str, store_call: F) -> Result<T, CatalogError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match timeout(self.query_timeout, store_call).await {
            Ok(result) => result.map_err(CatalogError::from),
            Err(_elapsed) => {
                warn!(
                    operation,
                    timeout_ms = self.query_timeout.as_millis(),
                    "store call exceeded deadline"
                );

                Err(CatalogError::DeadlineExceeded)
            }
        }
    }
}

impl Debug for CatalogQueryService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogQueryService")
            .field("query_timeout", &self.query_timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogService for CatalogQueryService {
    async fn categories_menu(&self) -> Result<Vec<CategoryWithChildren>, CatalogError> {
        debug!("categories menu requested");

        self.bounded(
            "categories_menu",
            self.categories.top_level_categories_with_children(),
        )
        .await
    }

    async fn category_breadcrumb(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithAncestors>, CatalogError> {
        debug!(%category, "category breadcrumb requested");

        let chain = self
            .bounded(
                "category_breadcrumb",
                self.categories.ancestor_chain(category),
            )
            .await?;

        if chain.is_empty() {
            return Err(CatalogError::NotFound);
        }

        Ok(chain)
    }

    async fn categories_side_menu(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithChildren>, CatalogError> {
        debug!(%category, "categories side menu requested");

        let menu = self
            .bounded(
                "categories_side_menu",
                self.categories.direct_children(category),
            )
            .await?;

        if menu.is_empty() {
            return Err(CatalogError::NotFound);
        }

        Ok(menu)
    }

    async fn products(&self, window: Window) -> Result<ProductPage, CatalogError> {
        debug!(start = window.start, qty = window.qty, "products requested");

        let page = self
            .bounded("products", self.products.list_products(window))
            .await?;

        ProductPage::try_from(page)
    }

    async fn products_from_category(
        &self,
        category: CategoryId,
        window: Window,
    ) -> Result<ProductPage, CatalogError> {
        debug!(
            %category,
            start = window.start,
            qty = window.qty,
            "products from category requested"
        );

        let page = self
            .bounded(
                "products_from_category",
                self.products.list_products_by_category(category, window),
            )
            .await?;

        ProductPage::try_from(page)
    }

    async fn search_products(
        &self,
        name: String,
        window: Window,
    ) -> Result<ProductPage, CatalogError> {
        debug!(
            name = %name,
            start = window.start,
            qty = window.qty,
            "product search requested"
        );

        let pattern = NamePattern::new(&name)?;

        let page = self
            .bounded(
                "search_products",
                self.products.search_products(pattern, window),
            )
            .await?;

        ProductPage::try_from(page)
    }
}

/// Catalog read operations.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Root categories, each with its direct children.
    async fn categories_menu(&self) -> Result<Vec<CategoryWithChildren>, CatalogError>;

    /// A category with its ancestor chain.
    async fn category_breadcrumb(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithAncestors>, CatalogError>;

    /// A category with its direct children.
    async fn categories_side_menu(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithChildren>, CatalogError>;

    /// One page of all products, sorted by name.
    async fn products(&self, window: Window) -> Result<ProductPage, CatalogError>;

    /// One page of the products in a category.
    async fn products_from_category(
        &self,
        category: CategoryId,
        window: Window,
    ) -> Result<ProductPage, CatalogError>;

    /// One page of the products whose name matches the regular expression
    /// `name`, ignoring case. An empty pattern matches every product.
    async fn search_products(
        &self,
        name: String,
        window: Window,
    ) -> Result<ProductPage, CatalogError>;
}
