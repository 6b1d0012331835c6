//! Catalog service errors.

use thiserror::Error;

use crate::{
    domain::{
        categories::records::CategoryId, errors::StoreError, products::records::ProductId,
    },
    object_id::ObjectIdError,
};

/// Coarse classification callers translate into their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Internal,
    Cancelled,
    DeadlineExceeded,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("category not found")]
    NotFound,

    #[error("product {product} references missing category {category}")]
    MissingCategory {
        product: ProductId,
        category: CategoryId,
    },

    #[error("value of product {0} cannot be represented")]
    UnrepresentableValue(ProductId),

    #[error("storage error")]
    Store(#[source] StoreError),

    #[error("operation cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::NotFound => ErrorKind::NotFound,
            Self::MissingCategory { .. } | Self::UnrepresentableValue(_) | Self::Store(_) => {
                ErrorKind::Internal
            }
            Self::Cancelled => ErrorKind::Cancelled,
            Self::DeadlineExceeded => ErrorKind::DeadlineExceeded,
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Cancelled => Self::Cancelled,
            StoreError::DeadlineExceeded => Self::DeadlineExceeded,
            StoreError::Sql(_) => Self::Store(error),
        }
    }
}

impl From<regex::Error> for CatalogError {
    fn from(error: regex::Error) -> Self {
        Self::InvalidArgument(format!("invalid name pattern: {error}"))
    }
}

impl From<ObjectIdError> for CatalogError {
    fn from(error: ObjectIdError) -> Self {
        Self::InvalidArgument(format!("cannot parse id: {error}"))
    }
}
