//! Transport-agnostic request payloads consumed by the services.
//!
//! Transport adapters (HTTP handlers, CLIs, tests) build these however they
//! like; field names deserialize from camelCase to match the wire convention
//! of typical JSON clients.

use serde::Deserialize;

use cartwheel_core::ItemId;

/// Payload for [`crate::services::AccountService::create_user`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password. Hashed before storage, never persisted as-is.
    pub password: String,
    /// Must match `password` exactly (case-sensitive).
    pub confirm_password: String,
}

/// Payload for cart mutation, shared by add and remove.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyCartRequest {
    /// Whose cart to mutate.
    pub username: String,
    /// Which catalog item to add or remove.
    pub item_id: ItemId,
    /// How many units. Zero is accepted and leaves the cart untouched.
    pub quantity: u32,
}
