//! Store contracts backing the commerce services.
//!
//! These traits are the seam between the domain layer and whatever
//! persistence the embedding application brings (a relational database, a
//! key-value store, the in-memory maps in [`memory`]). They use native
//! async fn in traits (edition 2024 RPITIT with explicit `Send` bounds, no
//! `async_trait` macro).
//!
//! Every lookup returns `Option` rather than a sentinel: absence is a normal
//! outcome the services classify, while `StoreError` carries genuine
//! infrastructure failures and propagates to callers unclassified.

pub mod memory;

use thiserror::Error;

use cartwheel_core::{ItemId, UserId};

use crate::models::{Item, Order, User};

pub use memory::{MemoryItemStore, MemoryOrderStore, MemoryUserStore};

/// Infrastructure failure in a backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or refused the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store returned data the domain layer cannot interpret.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Persistence for user accounts (each user carries its cart).
pub trait UserStore: Send + Sync {
    /// Look up a user by username. `None` if absent.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Persist a user, keyed by username, and return the stored record.
    fn save(&self, user: User) -> impl Future<Output = Result<User, StoreError>> + Send;
}

/// Read-only access to the item catalog.
pub trait ItemStore: Send + Sync {
    /// Look up a catalog item by ID. `None` if absent.
    fn find_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, StoreError>> + Send;
}

/// Persistence for submitted orders, keyed by user.
pub trait OrderStore: Send + Sync {
    /// Persist an order and return the stored record.
    fn save(&self, order: Order) -> impl Future<Output = Result<Order, StoreError>> + Send;

    /// All orders belonging to a user, in the order the store holds them.
    fn find_by_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Order>, StoreError>> + Send;
}
