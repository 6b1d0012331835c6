//! Categories

mod adjacency;
pub mod records;
mod repository;

pub(crate) use adjacency::{Edge, resolve_edges};
pub use repository::*;
