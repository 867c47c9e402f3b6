//! Order service: cart-to-order snapshots and order history.

use tracing::info;

use crate::error::Result;
use crate::models::Order;
use crate::stores::{OrderStore, UserStore};

/// Service converting carts into immutable orders and listing history.
///
/// Reads the cart through the resolved user; never mutates it. Submission
/// leaves the cart as-is.
pub struct OrderService<U: UserStore, O: OrderStore> {
    users: U,
    orders: O,
}

impl<U: UserStore, O: OrderStore> OrderService<U, O> {
    /// Create a new order service.
    pub const fn new(users: U, orders: O) -> Self {
        Self { users, orders }
    }

    /// Snapshot the user's current cart into a new order and persist it.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::UserNotFound` if the username does not
    /// resolve; no order is stored in that case.
    pub async fn submit(&self, username: &str) -> Result<Order> {
        let user = super::resolve_user(&self.users, username).await?;
        let order = self.orders.save(Order::snapshot(&user)).await?;

        info!(
            username = %user.username,
            order_id = %order.id,
            total = %order.total,
            "order submitted"
        );
        Ok(order)
    }

    /// List the user's order history, oldest first, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::UserNotFound` if the username does not
    /// resolve.
    pub async fn orders_for_user(&self, username: &str) -> Result<Vec<Order>> {
        let user = super::resolve_user(&self.users, username).await?;
        let orders = self.orders.find_by_user(user.id).await?;
        Ok(orders)
    }
}
