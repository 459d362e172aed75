//! Shopping cart domain module.
//!
//! This crate contains the cart aggregator: a pure, total reducer from
//! (cart, event) to a new cart, plus the derived totals. No IO, no HTTP, no
//! storage.

pub mod cart;
pub mod event;

pub use cart::{Cart, CartLine};
pub use event::{CartEvent, LineAdded, LineRemoved, QuantitySet};
