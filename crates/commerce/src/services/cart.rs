//! Cart service: add and remove items, maintaining the running total.

use tracing::info;

use crate::error::{CommerceError, Result};
use crate::models::{Cart, Item};
use crate::requests::ModifyCartRequest;
use crate::stores::{ItemStore, UserStore};

/// Service mutating user carts.
///
/// Every operation resolves the user and the item before touching the cart,
/// so a failed lookup leaves the cart exactly as it was.
pub struct CartService<U: UserStore, I: ItemStore> {
    users: U,
    items: I,
}

impl<U: UserStore, I: ItemStore> CartService<U, I> {
    /// Create a new cart service.
    pub const fn new(users: U, items: I) -> Self {
        Self { users, items }
    }

    /// Append `quantity` references to an item into the user's cart and grow
    /// the total by `price × quantity`, exactly.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::UserNotFound` or `CommerceError::ItemNotFound`
    /// if either lookup misses; the cart is untouched in both cases.
    pub async fn add_item(&self, req: &ModifyCartRequest) -> Result<Cart> {
        let mut user = super::resolve_user(&self.users, &req.username).await?;
        let item = self.resolve_item(req).await?;

        user.cart.add(item.id, item.price, req.quantity);
        let user = self.users.save(user).await?;

        info!(
            username = %user.username,
            item_id = %item.id,
            quantity = req.quantity,
            total = %user.cart.total(),
            "items added to cart"
        );
        Ok(user.cart)
    }

    /// Remove up to `quantity` references to an item from the user's cart and
    /// shrink the total by `price × quantity`.
    ///
    /// The total is debited by the full requested amount even when the cart
    /// holds fewer units (see DESIGN.md); callers own keeping the quantity
    /// within the cart's actual count.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::UserNotFound` or `CommerceError::ItemNotFound`
    /// if either lookup misses; the cart is untouched in both cases.
    pub async fn remove_item(&self, req: &ModifyCartRequest) -> Result<Cart> {
        let mut user = super::resolve_user(&self.users, &req.username).await?;
        let item = self.resolve_item(req).await?;

        user.cart.remove(item.id, item.price, req.quantity);
        let user = self.users.save(user).await?;

        info!(
            username = %user.username,
            item_id = %item.id,
            quantity = req.quantity,
            total = %user.cart.total(),
            "items removed from cart"
        );
        Ok(user.cart)
    }

    async fn resolve_item(&self, req: &ModifyCartRequest) -> Result<Item> {
        self.items
            .find_by_id(req.item_id)
            .await?
            .ok_or(CommerceError::ItemNotFound(req.item_id))
    }
}
