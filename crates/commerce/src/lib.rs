//! Cartwheel commerce domain layer.
//!
//! This crate holds the business logic behind user accounts, shopping carts,
//! and order submission. It is consumed by transport adapters (HTTP handlers
//! and the like) and backed by pluggable stores; neither end lives here.
//!
//! # Architecture
//!
//! Services are generic over their collaborator traits and receive them via
//! constructor injection:
//!
//! - [`services::AccountService`] - registration and lookup of users
//! - [`services::CartService`] - cart mutation with an exact running total
//! - [`services::OrderService`] - cart-to-order snapshots and order history
//!
//! Store contracts live in [`stores`], with in-memory implementations in
//! [`stores::memory`] for tests and embedding. Password hashing is behind
//! the [`hasher::PasswordHasher`] trait so the hash algorithm stays swappable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod hasher;
pub mod models;
pub mod requests;
pub mod services;
pub mod stores;

pub use error::{CommerceError, Result};
