//! Signals emitted by the cart state manager.
//!
//! The cart does not render anything. After each mutation it tells an
//! observer that the item count may have changed and, for user-visible
//! actions, hands over a notification to display.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Severity tag of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    /// Create a success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    /// Create an error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Event dispatched by [`crate::CartService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// Show a message to the user.
    Notification(Notification),
    /// The item count may have changed; consumers re-query `cart_count()`.
    CountChanged,
}

/// Receiver of cart events.
pub trait CartObserver {
    fn on_event(&self, event: CartEvent);
}

impl<T: CartObserver + ?Sized> CartObserver for &T {
    fn on_event(&self, event: CartEvent) {
        (**self).on_event(event);
    }
}

/// Observer that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_event(&self, _event: CartEvent) {}
}

/// Observer that records events in order until drained.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<CartEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded events, leaving the log empty.
    #[must_use]
    pub fn drain(&self) -> Vec<CartEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    /// Notifications recorded so far, without draining.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.events
            .lock()
            .map(|events| {
                events
                    .iter()
                    .filter_map(|event| match event {
                        CartEvent::Notification(n) => Some(n.clone()),
                        CartEvent::CountChanged => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of count-refresh signals recorded so far.
    #[must_use]
    pub fn count_refreshes(&self) -> usize {
        self.events
            .lock()
            .map(|events| {
                events
                    .iter()
                    .filter(|event| matches!(event, CartEvent::CountChanged))
                    .count()
            })
            .unwrap_or_default()
    }
}

impl CartObserver for EventLog {
    fn on_event(&self, event: CartEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(_) => tracing::warn!(?event, "Event log lock poisoned, dropping event"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_drain() {
        let log = EventLog::new();
        log.on_event(CartEvent::CountChanged);
        log.on_event(CartEvent::Notification(Notification::success("hi")));

        assert_eq!(log.count_refreshes(), 1);
        assert_eq!(log.notifications(), vec![Notification::success("hi")]);

        let events = log.drain();
        assert_eq!(events.len(), 2);
        assert!(log.drain().is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_value(CartEvent::Notification(Notification::error("Cart is empty")))
            .unwrap();
        assert_eq!(json["type"], "notification");
        assert_eq!(json["message"], "Cart is empty");
        assert_eq!(json["severity"], "error");

        let json = serde_json::to_value(CartEvent::CountChanged).unwrap();
        assert_eq!(json["type"], "count_changed");
    }
}
