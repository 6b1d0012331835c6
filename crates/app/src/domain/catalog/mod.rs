//! Catalog

pub mod errors;
pub mod models;
mod service;

pub use errors::*;
pub use service::*;
