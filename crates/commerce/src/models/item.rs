//! Catalog item domain type.

use serde::Serialize;

use cartwheel_core::{ItemId, Price};

/// A catalog entry.
///
/// Items are read-only from this layer's perspective: carts and orders
/// reference them by ID and never own or mutate them. Catalog management
/// happens elsewhere.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    /// Unique item ID.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Longer description.
    pub description: String,
    /// Unit price.
    pub price: Price,
}

impl Item {
    /// Create a new catalog item with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Price) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
