//! In-memory catalog
//!
//! An immutable snapshot implementing both stores. Products are kept sorted
//! by name (then id), so every listing is a filter and a window over one
//! pre-sorted vector.

use std::path::Path;

use async_trait::async_trait;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::domain::{
    categories::{
        CategoriesRepository, Edge,
        records::{
            CategoryId, CategoryRecord, CategorySnippet, CategoryWithAncestors,
            CategoryWithChildren,
        },
        resolve_edges,
    },
    errors::StoreError,
    products::{
        ProductsRepository,
        data::{NamePattern, ProductFilter, Window},
        records::{ProductRecord, ProductRecordPage, ProductWithCategory},
    },
};

mod fixtures;

pub use fixtures::FixtureError;

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    categories: FxHashMap<CategoryId, CategoryRecord>,
    roots: Vec<CategoryId>,
    products: Vec<ProductRecord>,
}

impl MemoryCatalog {
    /// Build a catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when two categories or two products share an id.
    pub fn new(
        categories: Vec<CategoryRecord>,
        mut products: Vec<ProductRecord>,
    ) -> Result<Self, FixtureError> {
        let mut by_id = FxHashMap::default();

        for category in categories {
            let id = category.id;

            if by_id.insert(id, category).is_some() {
                return Err(FixtureError::DuplicateCategory(id));
            }
        }

        let mut seen = FxHashSet::default();

        for product in &products {
            if !seen.insert(product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }
        }

        let mut roots: Vec<&CategoryRecord> =
            by_id.values().filter(|category| category.is_root()).collect();

        roots.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let roots = roots.into_iter().map(|category| category.id).collect();

        products.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(Self {
            categories: by_id,
            roots,
            products,
        })
    }

    /// Parse a YAML fixture document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is malformed or has duplicate ids.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FixtureError> {
        let (categories, products) = fixtures::parse_catalog(yaml)?;

        Self::new(categories, products)
    }

    /// Load a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        let (categories, products) = fixtures::read_catalog(path)?;

        Self::new(categories, products)
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    fn snippet(&self, id: &CategoryId) -> Option<CategorySnippet> {
        self.categories.get(id).map(CategoryRecord::snippet)
    }

    fn with_children(&self, record: &CategoryRecord) -> CategoryWithChildren {
        let children = resolve_edges(record.id, Edge::Children, &record.children, |id| {
            self.snippet(id)
        });

        CategoryWithChildren::new(record.clone(), children)
    }

    fn page(&self, filter: &ProductFilter, window: Window) -> ProductRecordPage {
        let matches: Vec<&ProductRecord> = self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .collect();

        let total = u64::try_from(matches.len()).unwrap_or(u64::MAX);

        let rows = window
            .apply(matches)
            .map(|product| ProductWithCategory {
                product: product.clone(),
                category: self.snippet(&product.category),
            })
            .collect();

        ProductRecordPage { total, rows }
    }
}

#[async_trait]
impl CategoriesRepository for MemoryCatalog {
    async fn top_level_categories_with_children(
        &self,
    ) -> Result<Vec<CategoryWithChildren>, StoreError> {
        Ok(self
            .roots
            .iter()
            .filter_map(|id| self.categories.get(id))
            .map(|record| self.with_children(record))
            .collect())
    }

    async fn ancestor_chain(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithAncestors>, StoreError> {
        Ok(self
            .categories
            .get(&category)
            .map(|record| {
                let ancestors =
                    resolve_edges(record.id, Edge::Ancestors, &record.ancestors, |id| {
                        self.snippet(id)
                    });

                CategoryWithAncestors::new(record.clone(), ancestors)
            })
            .into_iter()
            .collect())
    }

    async fn direct_children(
        &self,
        category: CategoryId,
    ) -> Result<Vec<CategoryWithChildren>, StoreError> {
        Ok(self
            .categories
            .get(&category)
            .map(|record| self.with_children(record))
            .into_iter()
            .collect())
    }
}

#[async_trait]
impl ProductsRepository for MemoryCatalog {
    async fn list_products(&self, window: Window) -> Result<ProductRecordPage, StoreError> {
        Ok(self.page(&ProductFilter::All, window))
    }

    async fn list_products_by_category(
        &self,
        category: CategoryId,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError> {
        Ok(self.page(&ProductFilter::Category(category), window))
    }

    async fn search_products(
        &self,
        pattern: NamePattern,
        window: Window,
    ) -> Result<ProductRecordPage, StoreError> {
        Ok(self.page(&ProductFilter::NameMatches(pattern), window))
    }
}
