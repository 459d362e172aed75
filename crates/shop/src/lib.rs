//! Storefront shell: the view-state holder that composes the catalog query
//! engine and the cart aggregator.
//!
//! The two leaf crates are pure; this crate owns the mutable state (current
//! query, cart, event journal, active view) and re-runs the query engine
//! whenever its inputs change.

pub mod seed;
pub mod session;

pub use seed::seed_catalog;
pub use session::{Session, View};
