//! tinyshop core - catalog types and the shared cart state manager.
//!
//! This crate is used by every tinyshop component:
//! - `storefront` - HTTP catalog, mock checkout, and session-backed cart
//! - `cli` - Command-line catalog browser and file-backed cart
//!
//! # Architecture
//!
//! The core crate performs no network or file I/O. Cart persistence goes
//! through the [`KeyValueStore`] trait, so each consumer injects its own
//! backing store (browser session, JSON file, in-memory map for tests).
//!
//! # Modules
//!
//! - [`types`] - Product records and type-safe IDs
//! - [`storage`] - Key-value store contract and an in-memory implementation
//! - [`events`] - Notification and cart-count signals
//! - [`cart`] - The cart state manager
//! - [`order`] - Order submission payload and acknowledgment

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod events;
pub mod order;
pub mod storage;
pub mod types;

pub use cart::{CART_KEY, CartError, CartLineItem, CartService, count_items, total_price};
pub use events::{CartEvent, CartObserver, EventLog, Notification, NoopObserver, Severity};
pub use order::{OrderAck, OrderSubmission};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use types::*;
