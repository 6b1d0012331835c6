//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use catalog_app::{
    context::AppContext,
    domain::{
        catalog::{
            MockCatalogService,
            models::{CategoryWithAncestors, CategoryWithChildren, Product},
        },
        categories::records::{CategoryId, CategorySnippet},
        products::records::ProductId,
    },
};

use crate::state::State;

/// Hex form of `category_id(1)`.
pub(crate) const CATEGORY_HEX: &str = "646464646464646464646401";

pub(crate) fn category_id(n: u8) -> CategoryId {
    let mut bytes = [0x64; 12];
    bytes[11] = n;

    CategoryId::from_bytes(bytes)
}

pub(crate) fn snippet(n: u8, name: &str) -> CategorySnippet {
    CategorySnippet {
        id: category_id(n),
        name: name.to_string(),
        slug: name.to_lowercase(),
    }
}

pub(crate) fn category_with_children(
    n: u8,
    name: &str,
    children: Vec<CategorySnippet>,
) -> CategoryWithChildren {
    CategoryWithChildren {
        id: category_id(n),
        name: name.to_string(),
        slug: name.to_lowercase(),
        children,
        last_updated: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn category_with_ancestors(
    n: u8,
    name: &str,
    ancestors: Vec<CategorySnippet>,
) -> CategoryWithAncestors {
    CategoryWithAncestors {
        id: category_id(n),
        name: name.to_string(),
        slug: name.to_lowercase(),
        ancestors,
        last_updated: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(n: u8, name: &str, value: f32) -> Product {
    let mut bytes = [0x70; 12];
    bytes[11] = n;

    Product {
        id: ProductId::from_bytes(bytes),
        name: name.to_string(),
        slug: name.to_lowercase(),
        quantity: 1,
        value,
        category: snippet(1, "Lighting"),
        last_updated: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn state_with_catalog(catalog: MockCatalogService) -> Arc<State> {
    State::from_app_context(AppContext::from_service(Arc::new(catalog), "mock"))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_catalog(catalog)))
            .push(route),
    )
}
