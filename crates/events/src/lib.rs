//! Domain events emitted from storefront interactions.

pub mod event;

pub use event::Event;
