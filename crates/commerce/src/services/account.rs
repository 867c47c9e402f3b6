//! Account service: user registration and lookup.

use tracing::{info, warn};

use crate::error::{CommerceError, Result};
use crate::hasher::PasswordHasher;
use crate::models::User;
use crate::requests::CreateUserRequest;
use crate::stores::UserStore;

/// Service for creating and looking up user accounts.
///
/// Owns the password-confirmation policy; the hash algorithm itself is
/// delegated to the injected [`PasswordHasher`].
pub struct AccountService<U: UserStore, H: PasswordHasher> {
    users: U,
    hasher: H,
}

impl<U: UserStore, H: PasswordHasher> AccountService<U, H> {
    /// Create a new account service.
    pub const fn new(users: U, hasher: H) -> Self {
        Self { users, hasher }
    }

    /// Register a new user with an empty cart.
    ///
    /// The confirmation comparison is exact and case-sensitive, and happens
    /// before hashing — a rejected request never reaches the hasher.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::Validation` if password and confirmation
    /// differ, `CommerceError::Hash` if hashing fails, or the store's error.
    pub async fn create_user(&self, req: &CreateUserRequest) -> Result<User> {
        if req.password != req.confirm_password {
            warn!(username = %req.username, "rejecting registration: password confirmation mismatch");
            return Err(CommerceError::Validation(
                "password and confirmation do not match".to_owned(),
            ));
        }

        let password_hash = self.hasher.hash(&req.password)?;
        let user = self
            .users
            .save(User::new(req.username.clone(), password_hash))
            .await?;

        info!(username = %user.username, user_id = %user.id, "user created");
        Ok(user)
    }

    /// Look up a user by username.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::UserNotFound` if no such user exists.
    pub async fn find_by_username(&self, username: &str) -> Result<User> {
        super::resolve_user(&self.users, username).await
    }
}
