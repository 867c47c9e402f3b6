//! Unified error handling for the commerce domain layer.
//!
//! All service operations return `Result<T, CommerceError>`. Failures are
//! terminal for the call: no internal retries, and no partial mutation is
//! observable afterwards (lookups happen before any cart or store write).

use thiserror::Error;

use cartwheel_core::ItemId;

use crate::hasher::HashError;
use crate::stores::StoreError;

/// Domain-level error type for account, cart, and order operations.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// No user with the given username exists.
    #[error("user not found: {0}")]
    UserNotFound(String),

    /// No catalog item with the given ID exists.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// Request rejected before any mutation (e.g., password mismatch).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Password hashing failed.
    #[error("password hashing error")]
    Hash(#[from] HashError),

    /// Store failure, propagated unclassified from the backing store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl CommerceError {
    /// Whether this is a not-found outcome (missing user or item).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ItemNotFound(_))
    }
}

/// Result type alias for `CommerceError`.
pub type Result<T> = std::result::Result<T, CommerceError>;
