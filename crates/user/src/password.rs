use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{UserError, UserResult};

/// Argon2id work factor
///
/// Defaults follow the OWASP baseline for Argon2id:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            memory_kib: 19456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// One-way adaptive password hasher
#[derive(Clone)]
pub struct Hasher {
    argon2: Argon2<'static>,
    /// Verified against when an account does not exist
    dummy_hash: Arc<str>,
}

impl Hasher {
    pub fn new(params: HashParams) -> UserResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| UserError::HashingError(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = argon2
            .hash_password(b"filmapi-dummy-password", &salt)
            .map_err(|e| UserError::HashingError(e.to_string()))?
            .to_string();

        Ok(Self {
            argon2,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// Hash a password with a fresh random salt, returns a PHC string
    pub fn hash(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| UserError::HashingError(e.to_string()))?
            .to_string();

        Ok(password_hash)
    }

    /// Verify a password against a PHC string
    ///
    /// Parameters are read from the stored hash. A malformed hash is a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Spend one verification on a hash no password is known for
    ///
    /// Keeps a missing account as slow as a wrong password.
    pub async fn verify_dummy_blocking(&self, password: String) -> bool {
        self.verify_blocking(password, self.dummy_hash.to_string()).await
    }

    /// [`Hasher::hash`] on the blocking thread pool
    pub async fn hash_blocking(&self, password: String) -> UserResult<String> {
        let hasher = self.clone();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| UserError::HashingError(e.to_string()))?
    }

    /// [`Hasher::verify`] on the blocking thread pool
    pub async fn verify_blocking(&self, password: String, hash: String) -> bool {
        let hasher = self.clone();

        match tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
