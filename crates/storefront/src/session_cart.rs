//! Per-browser cart storage on top of the HTTP session.
//!
//! [`SessionCartStore`] gives [`CartService`] a synchronous key-value view of
//! one session. The stored cart string is loaded from the session when a
//! request starts and written back once the cart operation is done, so every
//! request works on its own snapshot.

use std::sync::Mutex;

use tinyshop_core::{
    CART_KEY, CartEvent, CartLineItem, CartService, EventLog, KeyValueStore, StorageError,
    count_items, total_price,
};
use tower_sessions::Session;

use crate::error::Result;

/// Snapshot of a session's cart value.
///
/// Only [`CART_KEY`] is backed by the session; other keys read as missing
/// and cannot be written.
#[derive(Debug)]
pub struct SessionCartStore {
    slot: Mutex<Slot>,
    max_bytes: usize,
}

#[derive(Debug, Default)]
struct Slot {
    value: Option<String>,
    dirty: bool,
}

impl SessionCartStore {
    /// Create a snapshot holding `value`.
    #[must_use]
    pub fn new(value: Option<String>, max_bytes: usize) -> Self {
        Self {
            slot: Mutex::new(Slot {
                value,
                dirty: false,
            }),
            max_bytes,
        }
    }

    /// Load the cart value from `session`.
    ///
    /// # Errors
    ///
    /// Returns a session error if the session store cannot be read.
    pub async fn load(
        session: &Session,
        max_bytes: usize,
    ) -> std::result::Result<Self, tower_sessions::session::Error> {
        let value = session.get::<String>(CART_KEY).await?;
        Ok(Self::new(value, max_bytes))
    }

    /// Write the cart value back to `session` if it changed.
    ///
    /// # Errors
    ///
    /// Returns a session error if the session store cannot be written.
    pub async fn persist(
        &self,
        session: &Session,
    ) -> std::result::Result<(), tower_sessions::session::Error> {
        let pending = match self.slot.lock() {
            Ok(mut slot) if slot.dirty => {
                slot.dirty = false;
                slot.value.clone()
            }
            Ok(_) => None,
            Err(_) => {
                tracing::error!("Session cart lock poisoned, dropping cart write");
                None
            }
        };

        if let Some(value) = pending {
            session.insert(CART_KEY, value).await?;
        }
        Ok(())
    }
}

impl KeyValueStore for SessionCartStore {
    fn get_item(&self, key: &str) -> std::result::Result<Option<String>, StorageError> {
        if key != CART_KEY {
            return Ok(None);
        }
        let slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("session cart lock poisoned".to_string()))?;
        Ok(slot.value.clone())
    }

    fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), StorageError> {
        if key != CART_KEY {
            return Err(StorageError::Unavailable(format!(
                "session store only holds {CART_KEY}"
            )));
        }
        if value.len() > self.max_bytes {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                limit: self.max_bytes,
            });
        }

        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("session cart lock poisoned".to_string()))?;
        slot.value = Some(value.to_string());
        slot.dirty = true;
        Ok(())
    }
}

/// Cart service bound to one request's session snapshot.
pub type SessionCart<'a> = CartService<&'a SessionCartStore, &'a EventLog>;

/// Cart contents with derived totals and the events raised while handling
/// the request.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub count: u64,
    pub total: rust_decimal::Decimal,
    pub events: Vec<CartEvent>,
}

impl CartResponse {
    #[must_use]
    pub fn new(items: Vec<CartLineItem>, events: Vec<CartEvent>) -> Self {
        Self {
            count: count_items(&items),
            total: total_price(&items),
            items,
            events,
        }
    }
}

/// Run `operation` against the session's cart and persist the result.
///
/// # Errors
///
/// Returns `AppError::Session` if the session cannot be read or written.
pub async fn with_session_cart<T>(
    session: &Session,
    max_bytes: usize,
    operation: impl FnOnce(&SessionCart<'_>) -> T,
) -> Result<(T, CartResponse)> {
    let store = SessionCartStore::load(session, max_bytes).await?;
    let events = EventLog::new();

    let (output, items) = {
        let cart = CartService::with_observer(&store, &events);
        let output = operation(&cart);
        (output, cart.cart())
    };

    store.persist(session).await?;
    Ok((output, CartResponse::new(items, events.drain())))
}
