//! Password hashing behind a trait.
//!
//! The account service only ever sees an opaque one-way hash; the algorithm
//! lives here. [`Argon2Hasher`] is the production implementation.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Password hashing failed.
#[derive(Debug, Error)]
#[error("password hashing failed")]
pub struct HashError;

/// One-way password hashing capability. No decode, no verify surface here;
/// session/login handling lives outside this layer.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into an opaque string.
    ///
    /// The result must never equal the plaintext.
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;
}

/// Argon2id hasher producing PHC-format strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| HashError)
    }
}
