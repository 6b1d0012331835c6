//! Category response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::{
    catalog::models::{CategoryWithAncestors, CategoryWithChildren},
    categories::records::CategorySnippet,
};

/// A category reference embedded in other responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategorySnippetResponse {
    /// Category id, 24 lowercase hex characters
    pub id: String,

    /// Display name
    pub name: String,

    /// URL slug
    pub slug: String,
}

impl From<CategorySnippet> for CategorySnippetResponse {
    fn from(snippet: CategorySnippet) -> Self {
        Self {
            id: snippet.id.to_hex(),
            name: snippet.name,
            slug: snippet.slug,
        }
    }
}

/// A category with its direct children.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryMenuEntry {
    pub id: String,
    pub name: String,
    pub slug: String,

    /// Direct children in stored order
    pub children: Vec<CategorySnippetResponse>,

    /// RFC 3339 timestamp of the last change
    pub last_updated: String,
}

impl From<CategoryWithChildren> for CategoryMenuEntry {
    fn from(category: CategoryWithChildren) -> Self {
        Self {
            id: category.id.to_hex(),
            name: category.name,
            slug: category.slug,
            children: category.children.into_iter().map(Into::into).collect(),
            last_updated: category.last_updated.to_string(),
        }
    }
}

/// A category with its ancestor chain.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryBreadcrumbEntry {
    pub id: String,
    pub name: String,
    pub slug: String,

    /// Ancestors from parent to root
    pub ancestors: Vec<CategorySnippetResponse>,

    /// RFC 3339 timestamp of the last change
    pub last_updated: String,
}

impl From<CategoryWithAncestors> for CategoryBreadcrumbEntry {
    fn from(category: CategoryWithAncestors) -> Self {
        Self {
            id: category.id.to_hex(),
            name: category.name,
            slug: category.slug,
            ancestors: category.ancestors.into_iter().map(Into::into).collect(),
            last_updated: category.last_updated.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryMenuResponse {
    /// Categories with their children
    pub categories: Vec<CategoryMenuEntry>,
}

impl From<Vec<CategoryWithChildren>> for CategoryMenuResponse {
    fn from(categories: Vec<CategoryWithChildren>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryBreadcrumbResponse {
    /// The category with its ancestors
    pub categories: Vec<CategoryBreadcrumbEntry>,
}

impl From<Vec<CategoryWithAncestors>> for CategoryBreadcrumbResponse {
    fn from(categories: Vec<CategoryWithAncestors>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}
