//! In-memory store implementations.
//!
//! These back the test suite and small embeddings. Each store is cheaply
//! cloneable and shares its state across clones, so the same `MemoryUserStore`
//! can be handed to every service that resolves users — the services see one
//! consistent account set, the way they would share one database.
//!
//! Each operation takes the lock once; the read-modify-write window across a
//! service call is not transactional (see DESIGN.md on cart concurrency).

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use cartwheel_core::{ItemId, UserId};

use crate::models::{Item, Order, User};

use super::{ItemStore, OrderStore, StoreError, UserStore};

fn poisoned() -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_owned())
}

/// In-memory user store, keyed by username. Saving an existing username
/// replaces the record (last write wins).
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    /// Create an empty user store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of stored users.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.users.read().map_err(|_| poisoned())?.len())
    }

    /// Whether the store holds no users.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.users.read().map_err(|_| poisoned())?.is_empty())
    }
}

impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| poisoned())?;
        Ok(users.get(username).cloned())
    }

    async fn save(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.write().map_err(|_| poisoned())?;
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}

/// In-memory item catalog, seeded by the embedding application or test.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
}

impl MemoryItemStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog with an item, returning its ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the lock is poisoned.
    pub fn insert(&self, item: Item) -> Result<ItemId, StoreError> {
        let id = item.id;
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(id, item);
        Ok(id)
    }
}

impl ItemStore for MemoryItemStore {
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(&id).cloned())
    }
}

/// In-memory order history, preserving submission order.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl MemoryOrderStore {
    /// Create an empty order store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of stored orders, across all users.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.orders.read().map_err(|_| poisoned())?.len())
    }

    /// Whether the store holds no orders.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.orders.read().map_err(|_| poisoned())?.is_empty())
    }
}

impl OrderStore for MemoryOrderStore {
    async fn save(&self, order: Order) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders
            .iter()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use cartwheel_core::Price;

    use super::*;

    #[tokio::test]
    async fn test_user_store_save_then_find() {
        let store = MemoryUserStore::new();
        let user = User::new("test", "$argon2id$stub");
        store.save(user.clone()).await.expect("save");

        let found = store
            .find_by_username("test")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found.id, user.id);
        assert!(store.find_by_username("ghost").await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn test_user_store_is_shared_across_clones() {
        let store = MemoryUserStore::new();
        let clone = store.clone();
        clone.save(User::new("test", "h")).await.expect("save");

        assert!(store.find_by_username("test").await.expect("lookup").is_some());
        assert_eq!(store.len().expect("len"), 1);
    }

    #[tokio::test]
    async fn test_user_store_save_replaces_same_username() {
        let store = MemoryUserStore::new();
        store.save(User::new("test", "first")).await.expect("save");
        store.save(User::new("test", "second")).await.expect("save");

        assert_eq!(store.len().expect("len"), 1);
        let found = store
            .find_by_username("test")
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(found.password_hash, "second");
    }

    #[tokio::test]
    async fn test_item_store_lookup() {
        let store = MemoryItemStore::new();
        let id = store
            .insert(Item::new("Round Widget", "A widget that is round", Price::from_cents(299)))
            .expect("seed");

        let item = store.find_by_id(id).await.expect("lookup").expect("present");
        assert_eq!(item.name, "Round Widget");
        assert!(store
            .find_by_id(ItemId::generate())
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test]
    async fn test_order_store_filters_by_user_in_insertion_order() {
        let store = MemoryOrderStore::new();
        let alice = User::new("alice", "h");
        let bob = User::new("bob", "h");

        let first = store.save(Order::snapshot(&alice)).await.expect("save");
        store.save(Order::snapshot(&bob)).await.expect("save");
        let second = store.save(Order::snapshot(&alice)).await.expect("save");

        let history = store.find_by_user(alice.id).await.expect("lookup");
        let ids: Vec<_> = history.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);

        assert!(store
            .find_by_user(UserId::generate())
            .await
            .expect("lookup")
            .is_empty());
    }
}
