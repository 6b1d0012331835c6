//! Catalog Domain Concerns

pub mod catalog;
pub mod categories;
pub mod errors;
pub mod products;
