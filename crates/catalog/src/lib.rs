//! Catalog domain module.
//!
//! This crate contains the product record and the catalog query engine,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod product;
pub mod query;

pub use product::{Category, Product, Rating};
pub use query::{CatalogQuery, CategoryFilter, SortKey, query};
