//! Session middleware configuration.
//!
//! Sets up in-memory sessions using tower-sessions. Each browser gets its
//! own session cookie, and the session holds that browser's cart the way
//! local storage would. Sessions do not survive a restart.
//!
//! Records live in a moka cache: each one is evicted when its expiry date
//! passes, and the least recently used ones go first once the cache is
//! full.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "tinyshop_session";

/// Session expiry time in seconds (30 days).
const SESSION_EXPIRY_SECONDS: i64 = 30 * 24 * 60 * 60;

/// Create the in-memory session store, bounded by `session_capacity`.
#[must_use]
pub fn create_session_store(config: &StorefrontConfig) -> MokaStore {
    MokaStore::new(Some(config.session_capacity))
}

/// Create the session layer with an in-memory store.
///
/// # Arguments
///
/// * `config` - Storefront configuration (session capacity and the
///   secure-cookie decision)
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(create_session_store(config))
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use tower_sessions::SessionStore;
    use tower_sessions::cookie::time::{Duration, OffsetDateTime};
    use tower_sessions::session::{Id, Record};

    use super::*;

    fn record(expires_in: Duration) -> Record {
        Record {
            id: Id::default(),
            data: HashMap::from([("cart".to_string(), serde_json::json!("[]"))]),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_active_session_round_trips() {
        let store = create_session_store(&StorefrontConfig::default());
        let mut active = record(Duration::days(1));
        store.create(&mut active).await.unwrap();

        let loaded = store.load(&active.id).await.unwrap();
        assert_eq!(loaded.map(|r| r.data), Some(active.data));
    }

    #[tokio::test]
    async fn test_expired_session_is_gone() {
        let store = create_session_store(&StorefrontConfig::default());
        let mut expired = record(Duration::seconds(-1));
        store.create(&mut expired).await.unwrap();

        assert!(store.load(&expired.id).await.unwrap().is_none());
    }
}
