//! Category Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::object_id::TypedObjectId;

/// Category Id
pub type CategoryId = TypedObjectId<CategoryRecord>;

/// Category Record
///
/// `ancestors` runs from the immediate parent outward to the root and is
/// stored flat, so resolving a breadcrumb never walks parent pointers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub ancestors: Vec<CategoryId>,
    #[serde(default)]
    pub children: Vec<CategoryId>,
    pub last_updated: Timestamp,
}

impl CategoryRecord {
    /// Root categories have no ancestors.
    pub fn is_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    pub fn snippet(&self) -> CategorySnippet {
        CategorySnippet {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
        }
    }
}

/// Display fields of a category, embedded in other responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySnippet {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// A category with its direct children resolved one level deep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithChildren {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub children: Vec<CategorySnippet>,
    pub last_updated: Timestamp,
}

/// A category with its ancestor chain resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithAncestors {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub ancestors: Vec<CategorySnippet>,
    pub last_updated: Timestamp,
}

impl CategoryWithChildren {
    pub(crate) fn new(record: CategoryRecord, children: Vec<CategorySnippet>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            slug: record.slug,
            children,
            last_updated: record.last_updated,
        }
    }
}

impl CategoryWithAncestors {
    pub(crate) fn new(record: CategoryRecord, ancestors: Vec<CategorySnippet>) -> Self {
        Self {
            id: record.id,
            name: record.name,
            slug: record.slug,
            ancestors,
            last_updated: record.last_updated,
        }
    }
}
