//! Pagination query parsing helpers.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use catalog_app::domain::products::data::{DEFAULT_PAGE_SIZE, Window};

use crate::extensions::*;

/// Build a [`Window`] from optional `start` and `qty` query parameters.
pub(crate) trait WindowExt {
    fn into_window(self) -> Result<Window, StatusError>;
}

impl WindowExt for (QueryParam<String, false>, QueryParam<String, false>) {
    fn into_window(self) -> Result<Window, StatusError> {
        let (start, qty) = self;

        let start = parse_count(start.into_inner(), 0)
            .or_400("\"start\" must be a non-negative integer")?;
        let qty = parse_count(qty.into_inner(), DEFAULT_PAGE_SIZE)
            .or_400("\"qty\" must be a non-negative integer")?;

        Ok(Window::new(start, qty))
    }
}

fn parse_count(value: Option<String>, default: u32) -> Result<u32, std::num::ParseIntError> {
    value.map_or(Ok(default), |value| value.trim().parse::<u32>())
}
