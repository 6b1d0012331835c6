//! Products

pub mod data;
pub mod pricing;
pub mod records;
mod repository;

pub use repository::*;
