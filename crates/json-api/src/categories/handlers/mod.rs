//! Category Handlers

pub(crate) mod breadcrumb;
pub(crate) mod menu;
pub(crate) mod products;
pub(crate) mod side_menu;

use catalog_app::domain::{catalog::CatalogError, categories::records::CategoryId};
use salvo::prelude::StatusError;

use crate::errors::into_status_error;

/// Parse a category id path segment, rejecting malformed ids with 400.
pub(crate) fn parse_category_id(value: &str) -> Result<CategoryId, StatusError> {
    value
        .parse::<CategoryId>()
        .map_err(|error| into_status_error(CatalogError::from(error)))
}
