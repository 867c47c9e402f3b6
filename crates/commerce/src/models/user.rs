//! User account domain type.

use chrono::{DateTime, Utc};

use cartwheel_core::UserId;

use super::Cart;

/// A registered user.
///
/// Each user exclusively owns one [`Cart`] for its lifetime; the cart is
/// created empty alongside the account and is never deleted independently of
/// it. Not serializable on purpose: the password hash stays inside the
/// domain layer.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique username.
    pub username: String,
    /// Opaque password hash. Never the plaintext.
    pub password_hash: String,
    /// The user's cart.
    pub cart: Cart,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh ID and an empty cart.
    #[must_use]
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            username: username.into(),
            password_hash: password_hash.into(),
            cart: Cart::empty(),
            created_at: Utc::now(),
        }
    }
}
