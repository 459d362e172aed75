use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ProductId;
use storefront_events::Event;

/// Event: LineAdded.
///
/// Carries a snapshot of the product's display fields taken at add time
/// (copy-on-add): later catalog price changes never retroactively affect
/// lines already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub product_id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price_cents: u64,
    pub image: String,
    pub occurred_at: DateTime<Utc>,
}

impl LineAdded {
    /// Snapshot the display fields of a catalog product.
    pub fn of(product: &Product, occurred_at: DateTime<Utc>) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price_cents: product.price_cents,
            image: product.image.clone(),
            occurred_at,
        }
    }
}

/// Event: QuantitySet.
///
/// The quantity is signed on the wire: zero or negative means removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantitySet {
    pub product_id: ProductId,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LineRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    LineAdded(LineAdded),
    QuantitySet(QuantitySet),
    LineRemoved(LineRemoved),
}

impl CartEvent {
    /// Product id the event refers to.
    pub fn product_id(&self) -> ProductId {
        match self {
            CartEvent::LineAdded(e) => e.product_id,
            CartEvent::QuantitySet(e) => e.product_id,
            CartEvent::LineRemoved(e) => e.product_id,
        }
    }
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::LineAdded(_) => "cart.line.added",
            CartEvent::QuantitySet(_) => "cart.line.quantity_set",
            CartEvent::LineRemoved(_) => "cart.line.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::LineAdded(e) => e.occurred_at,
            CartEvent::QuantitySet(e) => e.occurred_at,
            CartEvent::LineRemoved(e) => e.occurred_at,
        }
    }
}
