//! Domain models for the commerce layer.
//!
//! These are validated domain objects, separate from whatever row or document
//! types a store backend uses internally.

pub mod cart;
pub mod item;
pub mod order;
pub mod user;

pub use cart::{Cart, CartLine};
pub use item::Item;
pub use order::{Order, OrderLine};
pub use user::User;
