//! Product response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::catalog::models::{Product, ProductPage};

use crate::categories::models::CategorySnippetResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product id, 24 lowercase hex characters
    pub id: String,

    pub name: String,

    pub slug: String,

    /// Units in stock
    pub quantity: i32,

    /// Price rounded up to two decimal places
    pub value: f32,

    /// The product's category
    pub category: CategorySnippetResponse,

    /// RFC 3339 timestamp of the last change
    pub last_updated: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            name: product.name,
            slug: product.slug,
            quantity: product.quantity,
            value: product.value,
            category: product.category.into(),
            last_updated: product.last_updated.to_string(),
        }
    }
}

/// One window over a sorted product listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPageResponse {
    /// Number of matching products, regardless of the window
    pub total: u64,

    /// Products in the requested window
    pub data: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            total: page.total,
            data: page.data.into_iter().map(Into::into).collect(),
        }
    }
}
