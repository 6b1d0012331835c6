//! Catalog domain, storage backends and application context.

pub mod context;
pub mod database;
pub mod domain;
pub mod memory;
pub mod object_id;

#[cfg(test)]
mod test;
