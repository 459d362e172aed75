//! The orchestrating view-state holder.

use chrono::Utc;
use tracing::debug;

use storefront_cart::{Cart, CartEvent, LineAdded};
use storefront_catalog::{CatalogQuery, CategoryFilter, Product, SortKey, query};
use storefront_core::ProductId;
use storefront_events::Event;

/// Active view of the storefront shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Shop,
    /// Admin dashboard placeholder; opaque, no storefront state flows in or
    /// out of it.
    Admin,
}

/// Holds the externally-owned mutable state and composes the two pure cores.
///
/// All recomputation is synchronous and runs to completion, so the visible
/// product list always reflects the most recently issued query; there is no
/// in-flight result that could go stale. Checkout is deliberately absent:
/// nothing here commits or submits the cart.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Vec<Product>,
    query: CatalogQuery,
    visible: Vec<Product>,
    cart: Cart,
    journal: Vec<CartEvent>,
    view: View,
}

impl Session {
    /// Start a session over a fixed catalog with the default query
    /// (empty search, all categories, name sort) and an empty cart.
    pub fn new(catalog: Vec<Product>) -> Self {
        let initial_query = CatalogQuery::default();
        let visible = query(&catalog, &initial_query);
        Self {
            catalog,
            query: initial_query,
            visible,
            cart: Cart::new(),
            journal: Vec::new(),
            view: View::default(),
        }
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// The current filtered, sorted product list.
    pub fn visible_products(&self) -> &[Product] {
        &self.visible
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.refresh();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
        self.refresh();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.visible = query(&self.catalog, &self.query);
        debug!(
            search_term = %self.query.search_term,
            sort = self.query.sort.as_str(),
            visible = self.visible.len(),
            "recomputed visible products"
        );
    }

    /// Journal the event and fold it into the cart.
    pub fn dispatch(&mut self, event: CartEvent) {
        debug!(
            event_type = event.event_type(),
            product_id = %event.product_id(),
            "applying cart event"
        );
        self.cart = self.cart.apply(&event);
        self.journal.push(event);
    }

    /// Convenience for the "add to cart" action: snapshots the catalog
    /// product's display fields and dispatches a `LineAdded`.
    ///
    /// Returns false when the id is not in the catalog (nothing dispatched).
    pub fn add_to_cart(&mut self, product_id: ProductId) -> bool {
        let Some(product) = self.catalog.iter().find(|p| p.id == product_id) else {
            return false;
        };
        let event = CartEvent::LineAdded(LineAdded::of(product, Utc::now()));
        self.dispatch(event);
        true
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn cart_item_count(&self) -> u64 {
        self.cart.item_count()
    }

    pub fn journal(&self) -> &[CartEvent] {
        &self.journal
    }

    /// Rebuild the cart from the journal. Always equals `cart()`.
    pub fn replayed_cart(&self) -> Cart {
        Cart::replay(&self.journal)
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_catalog;
    use storefront_cart::QuantitySet;

    fn session() -> Session {
        Session::new(seed_catalog().unwrap())
    }

    #[test]
    fn new_session_shows_whole_catalog_name_sorted() {
        let session = session();
        assert_eq!(session.visible_products().len(), 6);
        assert_eq!(session.visible_products()[0].name, "Bluetooth Speaker");
        assert!(session.cart().is_empty());
    }

    #[test]
    fn query_changes_recompute_eagerly() {
        let mut session = session();
        session.set_search_term("coffee");
        assert_eq!(session.visible_products().len(), 1);

        session.set_search_term("");
        assert_eq!(session.visible_products().len(), 6);
    }

    #[test]
    fn add_to_cart_unknown_id_dispatches_nothing() {
        let mut session = session();
        assert!(!session.add_to_cart(ProductId::new(99)));
        assert!(session.cart().is_empty());
        assert!(session.journal().is_empty());
    }

    #[test]
    fn replayed_cart_matches_incremental_cart() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(3));
        session.dispatch(CartEvent::QuantitySet(QuantitySet {
            product_id: ProductId::new(3),
            quantity: 4,
            occurred_at: Utc::now(),
        }));

        assert_eq!(session.replayed_cart(), *session.cart());
    }

    #[test]
    fn view_toggle_does_not_touch_shop_state() {
        let mut session = session();
        session.add_to_cart(ProductId::new(2));
        session.set_search_term("watch");

        session.set_view(View::Admin);
        assert_eq!(session.view(), View::Admin);
        assert_eq!(session.visible_products().len(), 1);
        assert_eq!(session.cart_item_count(), 1);

        session.set_view(View::Shop);
        assert_eq!(session.view(), View::Shop);
    }
}
