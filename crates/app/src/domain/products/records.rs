//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::{
    domain::categories::records::{CategoryId, CategorySnippet},
    object_id::TypedObjectId,
};

/// Product Id
pub type ProductId = TypedObjectId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub quantity: i32,
    /// Exact stored value; rounded only when emitted.
    pub value: Decimal,
    pub category: CategoryId,
    pub last_updated: Timestamp,
}

/// A product joined to its category.
///
/// `category` is `None` when the product's category reference does not
/// resolve; the store reports the row as-is and leaves the decision to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductWithCategory {
    pub product: ProductRecord,
    pub category: Option<CategorySnippet>,
}

/// One window of a product listing plus the size of the full match set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductRecordPage {
    pub total: u64,
    pub rows: Vec<ProductWithCategory>,
}
