use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

use crate::event::{CartEvent, LineAdded};

/// One aggregated cart entry, uniquely keyed by product id.
///
/// Display fields are the snapshot taken when the product was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub image: String,
    /// Always >= 1; a line at quantity zero does not exist.
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.price_cents * u64::from(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

/// Ordered collection of cart lines; insertion order is the order of first
/// addition.
///
/// Invariants: at most one line per product id, and every quantity >= 1.
/// The reducer (`apply`) upholds both for any event sequence; totals are
/// recomputed from the lines on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Pure, total reducer: returns the cart that results from one event.
    ///
    /// Per-line state machine: `absent -> present(1) -> present(k) -> absent`.
    /// No event can fail: unknown product ids and non-positive quantities have
    /// defined no-op/removal semantics.
    pub fn apply(&self, event: &CartEvent) -> Cart {
        match event {
            CartEvent::LineAdded(e) => self.with_added(e),
            CartEvent::QuantitySet(e) if e.quantity <= 0 => self.without(e.product_id),
            CartEvent::QuantitySet(e) => {
                // Positive after the guard above; clamp oversized values.
                let quantity = u32::try_from(e.quantity).unwrap_or(u32::MAX);
                self.with_quantity(e.product_id, quantity)
            }
            CartEvent::LineRemoved(e) => self.without(e.product_id),
        }
    }

    /// Fold an event sequence over the empty cart, in delivery order.
    ///
    /// Rebuilding from the journal must match the incrementally maintained
    /// cart; `QuantitySet` is last-write-wins, so order matters.
    pub fn replay<'a>(events: impl IntoIterator<Item = &'a CartEvent>) -> Cart {
        events
            .into_iter()
            .fold(Cart::new(), |cart, event| cart.apply(event))
    }

    /// Sum of price * quantity over all lines, in cents.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    fn with_added(&self, event: &LineAdded) -> Cart {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|l| l.product_id == event.product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => lines.push(CartLine {
                product_id: event.product_id,
                name: event.name.clone(),
                price_cents: event.price_cents,
                image: event.image.clone(),
                quantity: 1,
            }),
        }
        Cart { lines }
    }

    fn with_quantity(&self, product_id: ProductId, quantity: u32) -> Cart {
        let mut lines = self.lines.clone();
        // Unknown product id: no line is created.
        if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
        Cart { lines }
    }

    fn without(&self, product_id: ProductId) -> Cart {
        let lines = self
            .lines
            .iter()
            .filter(|l| l.product_id != product_id)
            .cloned()
            .collect();
        Cart { lines }
    }
}
