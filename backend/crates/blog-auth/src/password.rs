use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt hashing on the blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub async fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let password = password.to_string();
        let cost = self.cost;

        match tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(e)) => Err(Self::failure(e.to_string())),
            Err(e) => Err(Self::failure(format!("Task join error: {e}"))),
        }
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable
    pub async fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let password = password.to_string();
        let hash = hash.to_string();

        match tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await {
            Ok(Ok(matches)) => Ok(matches),
            Ok(Err(e)) => Err(Self::failure(e.to_string())),
            Err(e) => Err(Self::failure(format!("Task join error: {e}"))),
        }
    }

    #[track_caller]
    fn failure(message: String) -> AuthError {
        AuthError::PasswordHash {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
