//! Catalog Models

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::{
    catalog::errors::CatalogError,
    categories::records::CategorySnippet,
    products::{
        pricing,
        records::{ProductId, ProductRecordPage, ProductWithCategory},
    },
};

pub use crate::domain::categories::records::{CategoryWithAncestors, CategoryWithChildren};

/// Product as emitted to callers, with its category embedded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub quantity: i32,
    pub value: f32,
    pub category: CategorySnippet,
    pub last_updated: Timestamp,
}

/// Product Page
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProductPage {
    pub total: u64,
    pub data: Vec<Product>,
}

impl TryFrom<ProductWithCategory> for Product {
    type Error = CatalogError;

    fn try_from(row: ProductWithCategory) -> Result<Self, Self::Error> {
        let ProductWithCategory { product, category } = row;

        let Some(category) = category else {
            return Err(CatalogError::MissingCategory {
                product: product.id,
                category: product.category,
            });
        };

        let value = pricing::output_value(product.value)
            .ok_or(CatalogError::UnrepresentableValue(product.id))?;

        Ok(Self {
            id: product.id,
            name: product.name,
            slug: product.slug,
            quantity: product.quantity,
            value,
            category,
            last_updated: product.last_updated,
        })
    }
}

impl TryFrom<ProductRecordPage> for ProductPage {
    type Error = CatalogError;

    /// Fails as a whole when any row cannot be emitted.
    fn try_from(page: ProductRecordPage) -> Result<Self, Self::Error> {
        let data = page
            .rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            total: page.total,
            data,
        })
    }
}
