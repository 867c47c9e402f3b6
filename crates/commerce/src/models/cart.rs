//! Shopping cart domain type.
//!
//! A cart is a sequence of item references plus a running total. Internally
//! the sequence is stored as `(item_id, quantity)` lines rather than one
//! entry per unit; [`Cart::item_count`] flattens back to the
//! one-entry-per-unit view that callers reason in.

use serde::Serialize;

use cartwheel_core::{ItemId, Price};

/// One cart line: an item reference with a quantity and the unit price that
/// was in effect when the item was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Referenced catalog item.
    pub item_id: ItemId,
    /// How many units of the item the cart holds.
    pub quantity: u32,
    /// Unit price captured at add time.
    pub unit_price: Price,
}

/// A user's shopping cart.
///
/// Invariant: after every [`crate::services::CartService`] mutation,
/// `total == Σ unit_price × quantity` over the lines — except that removal
/// decrements the total by the full requested amount even when fewer units
/// are present (see `remove`). Fields are private so only this crate's
/// services can mutate them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: Price,
}

impl Cart {
    /// An empty cart with a zero total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: Price::ZERO,
        }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The cached running total.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// The number of item references the cart holds, counting each unit
    /// separately (three units of one item count as three).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append `quantity` references to an item, merging into an existing line
    /// for the same item where one exists, and grow the total accordingly.
    ///
    /// Adding zero units leaves the cart untouched.
    pub(crate) fn add(&mut self, item_id: ItemId, unit_price: Price, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.lines.iter_mut().find(|line| line.item_id == item_id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine {
                item_id,
                quantity,
                unit_price,
            }),
        }

        self.total += unit_price.times(quantity);
    }

    /// Remove up to `quantity` references to an item and shrink the total by
    /// `unit_price × quantity`.
    ///
    /// The total is decremented by the full requested amount even when fewer
    /// units are present; callers own keeping `quantity` within what the cart
    /// actually holds (see DESIGN.md). Lines that reach zero units are
    /// dropped. Removing zero units leaves the cart untouched.
    pub(crate) fn remove(&mut self, item_id: ItemId, unit_price: Price, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) {
            line.quantity = line.quantity.saturating_sub(quantity);
        }
        self.lines.retain(|line| line.quantity > 0);

        self.total -= unit_price.times(quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_id() -> ItemId {
        ItemId::generate()
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::empty();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_add_merges_lines_for_same_item() {
        let id = widget_id();
        let mut cart = Cart::empty();
        cart.add(id, Price::from_cents(299), 2);
        cart.add(id, Price::from_cents(299), 3);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Price::from_cents(1495));
    }

    #[test]
    fn test_add_appends_new_items_at_end() {
        let first = widget_id();
        let second = widget_id();
        let mut cart = Cart::empty();
        cart.add(first, Price::from_cents(100), 1);
        cart.add(second, Price::from_cents(250), 1);

        let ids: Vec<ItemId> = cart.lines().iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_eq!(cart.total(), Price::from_cents(350));
    }

    #[test]
    fn test_add_zero_is_a_no_op() {
        let mut cart = Cart::empty();
        cart.add(widget_id(), Price::from_cents(299), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_remove_reduces_count_and_total() {
        let id = widget_id();
        let mut cart = Cart::empty();
        cart.add(id, Price::from_cents(299), 5);
        cart.remove(id, Price::from_cents(299), 2);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Price::from_cents(897));
    }

    #[test]
    fn test_remove_drops_emptied_line() {
        let id = widget_id();
        let mut cart = Cart::empty();
        cart.add(id, Price::from_cents(299), 2);
        cart.remove(id, Price::from_cents(299), 2);

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_remove_beyond_count_still_debits_total() {
        // The total drops by the full requested amount even though only one
        // unit was present; the caller owns the bound (see DESIGN.md).
        let id = widget_id();
        let mut cart = Cart::empty();
        cart.add(id, Price::from_cents(299), 1);
        cart.remove(id, Price::from_cents(299), 3);

        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Price::from_cents(-598));
    }

    #[test]
    fn test_remove_absent_item_keeps_lines() {
        let id = widget_id();
        let other = widget_id();
        let mut cart = Cart::empty();
        cart.add(id, Price::from_cents(100), 2);
        cart.remove(other, Price::from_cents(50), 1);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), Price::from_cents(150));
    }
}
