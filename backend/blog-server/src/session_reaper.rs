use blog_auth::SessionStore;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Periodically drop expired sessions from the store.
///
/// Expired sessions are already invisible to `load`; this only reclaims
/// space. The first sweep runs immediately.
pub fn spawn_session_reaper(store: Arc<dyn SessionStore>, every: Duration) -> JoinHandle<()> {
    info!(
        "Session reaper: {} store every {}",
        store.backend(),
        humantime::format_duration(every)
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            match store.purge_expired().await {
                Ok(0) => debug!("Session reaper: nothing expired"),
                Ok(n) => info!("Session reaper: removed {} expired session(s)", n),
                Err(e) => warn!("Session reaper failed: {}", e),
            }
        }
    })
}
