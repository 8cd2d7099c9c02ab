use blog_core::Role;
use blog_db::UserRepository;

use log::{info, warn};
use sqlx::SqlitePool;

/// Promote the configured account to admin if it exists.
///
/// Never creates accounts: the user signs up first, then the next start
/// promotes them. Failures are logged and startup continues.
pub async fn bootstrap_admin(pool: &SqlitePool, email: Option<&str>) -> Option<Role> {
    let email = email?.trim().to_lowercase();

    match UserRepository::new(pool.clone()).promote_to_admin(&email).await {
        Ok(Some(user)) => {
            info!("Bootstrap admin {} ({}) is {}", user.email, user.id, user.role);
            Some(user.role)
        }
        Ok(None) => {
            warn!("Bootstrap admin {} has no account yet; sign up and restart", email);
            None
        }
        Err(e) => {
            warn!("Bootstrap admin {} could not be promoted: {}", email, e);
            None
        }
    }
}
