//! Commerce domain services.
//!
//! Each service is generic over the store traits it collaborates with and
//! receives them by constructor injection. Cart and order operations resolve
//! the acting user through the same [`crate::stores::UserStore`] contract the
//! account service persists through.

pub mod account;
pub mod cart;
pub mod order;

pub use account::AccountService;
pub use cart::CartService;
pub use order::OrderService;

use crate::error::{CommerceError, Result};
use crate::models::User;
use crate::stores::UserStore;

/// Resolve a username to its user, classifying absence as not-found.
pub(crate) async fn resolve_user<U: UserStore>(users: &U, username: &str) -> Result<User> {
    users
        .find_by_username(username)
        .await?
        .ok_or_else(|| CommerceError::UserNotFound(username.to_owned()))
}
