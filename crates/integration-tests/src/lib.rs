//! Integration tests for Cartwheel.
//!
//! The tests exercise the commerce services end-to-end over the in-memory
//! stores, with real Argon2 hashing. This crate's library is the shared
//! fixture; the tests live under `tests/`, one file per service.

use cartwheel_commerce::hasher::Argon2Hasher;
use cartwheel_commerce::models::{Item, User};
use cartwheel_commerce::requests::{CreateUserRequest, ModifyCartRequest};
use cartwheel_commerce::services::{AccountService, CartService, OrderService};
use cartwheel_commerce::stores::{MemoryItemStore, MemoryOrderStore, MemoryUserStore};
use cartwheel_core::{ItemId, Price};

/// All three services wired over one shared set of in-memory stores, the way
/// an application would wire them over one database.
pub struct CommerceHarness {
    pub user_store: MemoryUserStore,
    pub item_store: MemoryItemStore,
    pub order_store: MemoryOrderStore,
    pub accounts: AccountService<MemoryUserStore, Argon2Hasher>,
    pub carts: CartService<MemoryUserStore, MemoryItemStore>,
    pub orders: OrderService<MemoryUserStore, MemoryOrderStore>,
}

impl CommerceHarness {
    #[must_use]
    pub fn new() -> Self {
        let user_store = MemoryUserStore::new();
        let item_store = MemoryItemStore::new();
        let order_store = MemoryOrderStore::new();

        Self {
            accounts: AccountService::new(user_store.clone(), Argon2Hasher),
            carts: CartService::new(user_store.clone(), item_store.clone()),
            orders: OrderService::new(user_store.clone(), order_store.clone()),
            user_store,
            item_store,
            order_store,
        }
    }

    /// Seed a catalog item priced in cents, returning its ID.
    pub fn seed_item(&self, name: &str, cents: i64) -> ItemId {
        self.item_store
            .insert(Item::new(name, format!("A {name}"), Price::from_cents(cents)))
            .expect("seed item")
    }

    /// Register a user, asserting the happy path.
    pub async fn register(&self, username: &str, password: &str) -> User {
        self.accounts
            .create_user(&CreateUserRequest {
                username: username.to_owned(),
                password: password.to_owned(),
                confirm_password: password.to_owned(),
            })
            .await
            .expect("user registered")
    }
}

impl Default for CommerceHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for a cart mutation request.
#[must_use]
pub fn modify(username: &str, item_id: ItemId, quantity: u32) -> ModifyCartRequest {
    ModifyCartRequest {
        username: username.to_owned(),
        item_id,
        quantity,
    }
}
