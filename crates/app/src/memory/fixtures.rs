//! Catalog fixtures
//!
//! YAML documents with `categories` and `products` lists. Product values are
//! decimal strings so they load without passing through a float.

use std::{fs, io, path::Path};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{
    categories::records::{CategoryId, CategoryRecord},
    products::records::{ProductId, ProductRecord},
};

/// Fixture Loading Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("invalid value {value:?} for product {product}")]
    InvalidValue { product: ProductId, value: String },

    #[error("duplicate category id {0}")]
    DuplicateCategory(CategoryId),

    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    categories: Vec<CategoryRecord>,

    #[serde(default)]
    products: Vec<ProductFixture>,
}

#[derive(Debug, Deserialize)]
struct ProductFixture {
    id: ProductId,
    name: String,
    slug: String,
    #[serde(default)]
    quantity: i32,
    value: String,
    category: CategoryId,
    last_updated: Timestamp,
}

impl TryFrom<ProductFixture> for ProductRecord {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let value = Decimal::from_str_exact(fixture.value.trim()).map_err(|_parse| {
            FixtureError::InvalidValue {
                product: fixture.id,
                value: fixture.value.clone(),
            }
        })?;

        Ok(Self {
            id: fixture.id,
            name: fixture.name,
            slug: fixture.slug,
            quantity: fixture.quantity,
            value,
            category: fixture.category,
            last_updated: fixture.last_updated,
        })
    }
}

/// Categories and products parsed from a fixture document.
pub(crate) type ParsedCatalog = (Vec<CategoryRecord>, Vec<ProductRecord>);

pub(crate) fn parse_catalog(yaml: &str) -> Result<ParsedCatalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(ProductRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((fixture.categories, products))
}

pub(crate) fn read_catalog(path: &Path) -> Result<ParsedCatalog, FixtureError> {
    parse_catalog(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const SAMPLE_CATALOG: &str = include_str!("../../../../fixtures/catalog.yaml");

    #[test]
    fn parses_sample_catalog() -> TestResult {
        let (categories, products) = parse_catalog(SAMPLE_CATALOG)?;

        assert!(!categories.is_empty(), "sample should define categories");
        assert!(!products.is_empty(), "sample should define products");
        assert!(categories.iter().any(CategoryRecord::is_root));

        Ok(())
    }

    #[test]
    fn keeps_decimal_values_exact() -> TestResult {
        let yaml = r#"
products:
  - id: 64b7f0c2a1b2c3d4e5f61001
    name: Lamp
    slug: lamp
    quantity: 2
    value: "19.995"
    category: 64b7f0c2a1b2c3d4e5f60001
    last_updated: 2024-01-01T00:00:00Z
"#;

        let (categories, products) = parse_catalog(yaml)?;

        assert!(categories.is_empty());
        assert_eq!(products.len(), 1);
        assert_eq!(
            products.first().map(|p| p.value),
            Some(Decimal::from_str_exact("19.995")?)
        );

        Ok(())
    }

    #[test]
    fn rejects_non_decimal_value() {
        let yaml = r#"
products:
  - id: 64b7f0c2a1b2c3d4e5f61001
    name: Lamp
    slug: lamp
    value: cheap
    category: 64b7f0c2a1b2c3d4e5f60001
    last_updated: 2024-01-01T00:00:00Z
"#;

        let result = parse_catalog(yaml);

        assert!(
            matches!(result, Err(FixtureError::InvalidValue { .. })),
            "expected InvalidValue, got {result:?}"
        );
    }

    #[test]
    fn rejects_malformed_ids() {
        let yaml = r"
categories:
  - id: not-an-id
    name: Garden
    slug: garden
    last_updated: 2024-01-01T00:00:00Z
";

        let result = parse_catalog(yaml);

        assert!(
            matches!(result, Err(FixtureError::Yaml(_))),
            "expected Yaml error, got {result:?}"
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = read_catalog(Path::new("/definitely/not/here.yaml"));

        assert!(
            matches!(result, Err(FixtureError::Io(_))),
            "expected Io error, got {result:?}"
        );
    }
}
