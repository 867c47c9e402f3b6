//! Order domain type.
//!
//! An order is an immutable snapshot of a cart taken at submission time. It
//! deep-copies the cart lines and total, so later mutations of the live cart
//! (or of the catalog) are never observable through the order.

use chrono::{DateTime, Utc};
use serde::Serialize;

use cartwheel_core::{ItemId, OrderId, Price, UserId};

use super::User;

/// One order line, frozen at submission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Referenced catalog item.
    pub item_id: ItemId,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at the time the item entered the cart.
    pub unit_price: Price,
}

/// An immutable order snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// Owning user (back-reference only, no shared mutable state).
    pub user_id: UserId,
    /// Owning user's username, denormalized for history listings.
    pub username: String,
    /// Snapshot of the cart lines at submission.
    pub lines: Vec<OrderLine>,
    /// Snapshot of the cart total at submission.
    pub total: Price,
    /// When the order was submitted.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot a user's current cart into a new order.
    ///
    /// The cart itself is left untouched; submission does not clear it.
    #[must_use]
    pub fn snapshot(user: &User) -> Self {
        let lines = user
            .cart
            .lines()
            .iter()
            .map(|line| OrderLine {
                item_id: line.item_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
            })
            .collect();

        Self {
            id: OrderId::generate(),
            user_id: user.id,
            username: user.username.clone(),
            lines,
            total: user.cart.total(),
            placed_at: Utc::now(),
        }
    }

    /// The number of item references in the snapshot, counting each unit
    /// separately — same convention as [`super::Cart::item_count`].
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
