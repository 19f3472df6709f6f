//! Cart state manager.
//!
//! [`CartService`] is the only code that mutates a cart. Every operation
//! reads the cart from the injected [`KeyValueStore`], applies the change,
//! and writes the whole cart back under [`CART_KEY`]. Nothing is cached
//! between calls.
//!
//! Storage problems never reach the caller: an unreadable or corrupt cart
//! reads as empty, and a failed write is logged and dropped. The persisted
//! copy can therefore be stale after a failed write.
//!
//! Two contexts sharing one store (for example two requests for the same
//! browser session) can overwrite each other's changes. There is no
//! versioning on the stored value.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::events::{CartEvent, CartObserver, NoopObserver, Notification};
use crate::order::OrderSubmission;
use crate::storage::KeyValueStore;
use crate::types::{ProductId, ProductSnapshot};

/// Store key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Errors returned by cart operations that have no fail-open fallback.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Checkout was attempted with no line items.
    #[error("Cart is empty")]
    EmptyCart,
}

/// One product in the cart with its quantity.
///
/// Serialized as the product snapshot's fields plus `quantity`. Entries
/// written before quantities existed have no `quantity` field, or a `null`
/// one once an older client bumped them, and read as 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: ProductSnapshot,
    #[serde(default = "default_quantity", deserialize_with = "quantity_or_default")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

fn quantity_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_quantity))
}

impl CartLineItem {
    /// Create a line with quantity 1.
    #[must_use]
    pub fn new(product: impl Into<ProductSnapshot>) -> Self {
        Self {
            product: product.into(),
            quantity: 1,
        }
    }

    /// Set the quantity.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.product.name.as_deref()
    }

    /// Unit price times quantity; a missing price counts as zero.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(Decimal::from(self.quantity))
    }
}

/// Total number of units across all lines.
#[must_use]
pub fn count_items(cart: &[CartLineItem]) -> u64 {
    cart.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Sum of line totals.
#[must_use]
pub fn total_price(cart: &[CartLineItem]) -> Decimal {
    cart.iter()
        .map(CartLineItem::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// The cart state manager.
///
/// Stateless apart from its collaborators: the store holding the cart and
/// the observer receiving notifications and count-refresh signals.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tinyshop_core::{CartService, MemoryStore, ProductId, ProductSnapshot};
///
/// let cart = CartService::new(MemoryStore::new());
/// let product = ProductSnapshot::new(ProductId::new(42))
///     .with_name("Test")
///     .with_price(Decimal::from(100));
///
/// cart.add_to_cart(product.clone());
/// cart.add_to_cart(product);
///
/// assert_eq!(cart.cart().len(), 1);
/// assert_eq!(cart.cart_count(), 2);
/// assert_eq!(cart.cart_total(), Decimal::from(200));
/// ```
#[derive(Debug)]
pub struct CartService<S, O = NoopObserver> {
    store: S,
    observer: O,
}

impl<S: KeyValueStore> CartService<S> {
    /// Create a cart service that discards events.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            observer: NoopObserver,
        }
    }
}

impl<S: KeyValueStore, O: CartObserver> CartService<S, O> {
    /// Create a cart service that reports events to `observer`.
    #[must_use]
    pub const fn with_observer(store: S, observer: O) -> Self {
        Self { store, observer }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Split the service back into its store and observer.
    pub fn into_parts(self) -> (S, O) {
        (self.store, self.observer)
    }

    /// Read the current cart.
    ///
    /// Returns an empty cart when nothing is stored, when the store cannot be
    /// read, or when the stored text is not a JSON array. Lines that do not
    /// parse (for example a negative or fractional quantity) and lines with a
    /// zero quantity are dropped; the rest of the cart is kept.
    pub fn cart(&self) -> Vec<CartLineItem> {
        let raw = match self.store.get_item(CART_KEY) {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read cart");
                return Vec::new();
            }
        };

        let entries = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(error = %e, "Stored cart is invalid, treating as empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<CartLineItem>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(error = %e, "Dropping invalid cart line");
                    None
                }
            })
            .filter(|item| item.quantity > 0)
            .collect()
    }

    /// Replace the stored cart with `cart`.
    ///
    /// Write failures are logged and swallowed.
    pub fn save_cart(&self, cart: &[CartLineItem]) {
        let json = match serde_json::to_string(cart) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.store.set_item(CART_KEY, &json) {
            tracing::error!(error = %e, lines = cart.len(), "Failed to save cart");
        }
    }

    /// Add one unit of `product`.
    ///
    /// An existing line with the same ID is incremented in place; otherwise a
    /// new line with quantity 1 is appended. Display fields are not
    /// validated.
    pub fn add_to_cart(&self, product: impl Into<ProductSnapshot>) {
        let product = product.into();
        let product_id = product.id;
        let message = product.name.as_deref().map_or_else(
            || "Item added to cart".to_string(),
            |name| format!("Added \"{name}\" to cart"),
        );

        let mut cart = self.cart();
        if let Some(existing) = cart.iter_mut().find(|item| item.id() == product_id) {
            existing.quantity = existing.quantity.saturating_add(1);
        } else {
            cart.push(CartLineItem::new(product));
        }

        tracing::debug!(%product_id, "Added to cart");
        self.save_cart(&cart);
        self.observer.on_event(CartEvent::CountChanged);
        self.observer
            .on_event(CartEvent::Notification(Notification::success(message)));
    }

    /// Change the quantity of a line by `delta`.
    ///
    /// Unknown IDs are ignored. A resulting quantity of zero or less removes
    /// the line (see [`Self::remove_item`]).
    pub fn update_quantity(&self, product_id: ProductId, delta: i64) {
        let mut cart = self.cart();
        let Some(item) = cart.iter_mut().find(|item| item.id() == product_id) else {
            tracing::debug!(%product_id, "Quantity update for product not in cart");
            return;
        };

        let quantity = i64::from(item.quantity).saturating_add(delta);
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.save_cart(&cart);
        self.observer.on_event(CartEvent::CountChanged);
    }

    /// Remove the line for `product_id`, if any.
    pub fn remove_item(&self, product_id: ProductId) {
        let (removed, remaining): (Vec<_>, Vec<_>) = self
            .cart()
            .into_iter()
            .partition(|item| item.id() == product_id);

        self.save_cart(&remaining);
        self.observer.on_event(CartEvent::CountChanged);

        if let Some(item) = removed.first() {
            let name = item.name().unwrap_or("Unknown item");
            self.observer
                .on_event(CartEvent::Notification(Notification::success(format!(
                    "Removed \"{name}\" from cart"
                ))));
        }
    }

    /// Store an empty cart.
    pub fn clear_cart(&self) {
        self.save_cart(&[]);
        self.observer.on_event(CartEvent::CountChanged);
    }

    /// Total number of units in the cart.
    pub fn cart_count(&self) -> u64 {
        count_items(&self.cart())
    }

    /// Total price of the cart.
    pub fn cart_total(&self) -> Decimal {
        total_price(&self.cart())
    }

    /// Build the checkout payload from the current cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::EmptyCart` (and emits an error notification) when
    /// the cart has no lines.
    pub fn order_submission(
        &self,
        timestamp: DateTime<Utc>,
    ) -> Result<OrderSubmission, CartError> {
        let cart = self.cart();
        if cart.is_empty() {
            self.observer
                .on_event(CartEvent::Notification(Notification::error(
                    CartError::EmptyCart.to_string(),
                )));
            return Err(CartError::EmptyCart);
        }

        Ok(OrderSubmission {
            total: total_price(&cart),
            cart,
            timestamp,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::events::{EventLog, Severity};
    use crate::storage::{MemoryStore, StorageError};
    use proptest::prelude::*;
    use serde_json::Value;

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disk on fire".to_string()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disk on fire".to_string()))
        }
    }

    fn service() -> CartService<MemoryStore, EventLog> {
        CartService::with_observer(MemoryStore::new(), EventLog::new())
    }

    fn product(id: i32, name: &str, price: i64) -> ProductSnapshot {
        ProductSnapshot::new(ProductId::new(id))
            .with_name(name)
            .with_price(Decimal::from(price))
    }

    fn stored(cart: &CartService<MemoryStore, EventLog>) -> Value {
        let raw = cart.store().get_item(CART_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn test_empty_store_reads_empty_cart() {
        let cart = service();
        assert!(cart.cart().is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.cart_total(), Decimal::ZERO);
    }

    #[test]
    fn test_invalid_json_reads_empty_cart() {
        let cart = service();
        cart.store().set_item(CART_KEY, "invalid json").unwrap();
        assert!(cart.cart().is_empty());

        cart.store().set_item(CART_KEY, r#"{"id": 1}"#).unwrap();
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_unreadable_store_reads_empty_cart() {
        let cart = CartService::new(BrokenStore);
        assert!(cart.cart().is_empty());
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_valid_json_is_returned() {
        let cart = service();
        cart.store()
            .set_item(CART_KEY, r#"[{"id": 1, "name": "item1", "quantity": 2}]"#)
            .unwrap();

        let lines = cart.cart();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id(), ProductId::new(1));
        assert_eq!(lines[0].name(), Some("item1"));
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_save_cart_writes_under_cart_key() {
        let cart = service();
        let lines = vec![CartLineItem::new(product(1, "item1", 5))];
        cart.save_cart(&lines);

        let value = stored(&cart);
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["name"], "item1");
        assert_eq!(value[0]["quantity"], 1);
    }

    #[test]
    fn test_add_new_product_to_empty_cart() {
        let cart = service();
        cart.add_to_cart(product(42, "Test", 100));

        let lines = cart.cart();
        assert_eq!(lines, vec![CartLineItem::new(product(42, "Test", 100))]);
        assert_eq!(cart.cart_total(), Decimal::from(100));

        let value = stored(&cart);
        assert_eq!(value[0]["price"].as_f64(), Some(100.0));
        assert_eq!(value[0]["quantity"], 1);
    }

    #[test]
    fn test_add_existing_product_increments_in_place() {
        let cart = service();
        cart.store()
            .set_item(
                CART_KEY,
                r#"[{"id": 99, "name": "existing", "quantity": 3, "price": 50}]"#,
            )
            .unwrap();

        cart.add_to_cart(product(99, "existing", 50));

        let lines = cart.cart();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 4);
        assert_eq!(cart.cart_total(), Decimal::from(200));
    }

    #[test]
    fn test_add_same_product_twice() {
        let cart = service();
        cart.add_to_cart(product(7, "Seven", 10));
        cart.add_to_cart(product(7, "Seven", 10));

        let lines = cart.cart();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 1));
        cart.add_to_cart(product(2, "b", 1));
        cart.add_to_cart(product(1, "a", 1));

        let ids: Vec<i32> = cart.cart().iter().map(|i| i.id().as_i32()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_add_passes_through_missing_fields() {
        let cart = service();
        cart.add_to_cart(ProductSnapshot::new(ProductId::new(3)));

        let lines = cart.cart();
        assert_eq!(lines[0].name(), None);
        assert_eq!(lines[0].product.price, None);
        assert_eq!(cart.cart_total(), Decimal::ZERO);
        assert_eq!(cart.cart_count(), 1);
    }

    #[test]
    fn test_add_emits_count_and_notification() {
        let cart = service();
        cart.add_to_cart(product(1, "Widget", 3));

        assert_eq!(
            cart.observer().drain(),
            vec![
                CartEvent::CountChanged,
                CartEvent::Notification(Notification::success("Added \"Widget\" to cart")),
            ]
        );
    }

    #[test]
    fn test_update_quantity_adds_delta() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 2));
        cart.update_quantity(ProductId::new(1), 4);

        assert_eq!(cart.cart()[0].quantity, 5);
        assert_eq!(cart.cart_total(), Decimal::from(10));
    }

    #[test]
    fn test_update_quantity_to_zero_removes_line() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 2));
        cart.add_to_cart(product(2, "b", 2));
        cart.add_to_cart(product(1, "a", 2));
        let _ = cart.observer().drain();

        cart.update_quantity(ProductId::new(1), -5);

        let lines = cart.cart();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id(), ProductId::new(2));
        assert_eq!(
            cart.observer().notifications(),
            vec![Notification::success("Removed \"a\" from cart")]
        );
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 2));
        let before = stored(&cart);
        let _ = cart.observer().drain();

        cart.update_quantity(ProductId::new(404), 1);

        assert_eq!(stored(&cart), before);
        assert!(cart.observer().drain().is_empty());
    }

    #[test]
    fn test_update_quantity_on_legacy_line_without_quantity() {
        let cart = service();
        cart.store()
            .set_item(CART_KEY, r#"[{"id": 1, "name": "old", "price": 10}]"#)
            .unwrap();

        assert_eq!(cart.cart_count(), 1);
        assert_eq!(cart.cart_total(), Decimal::from(10));

        cart.update_quantity(ProductId::new(1), 1);
        assert_eq!(cart.cart()[0].quantity, 2);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 1));
        cart.add_to_cart(product(2, "b", 1));

        cart.remove_item(ProductId::new(1));
        let once = cart.cart();
        cart.remove_item(ProductId::new(1));
        let twice = cart.cart();

        assert_eq!(once, twice);
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_remove_missing_item_has_no_notification() {
        let cart = service();
        cart.remove_item(ProductId::new(1));

        assert!(cart.observer().notifications().is_empty());
        assert_eq!(cart.observer().count_refreshes(), 1);
    }

    #[test]
    fn test_remove_unnamed_item_notification() {
        let cart = service();
        cart.add_to_cart(ProductSnapshot::new(ProductId::new(9)));
        let _ = cart.observer().drain();

        cart.remove_item(ProductId::new(9));
        assert_eq!(
            cart.observer().notifications(),
            vec![Notification::success("Removed \"Unknown item\" from cart")]
        );
    }

    #[test]
    fn test_clear_cart() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 1));
        let _ = cart.observer().drain();

        cart.clear_cart();

        assert!(cart.cart().is_empty());
        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.observer().drain(), vec![CartEvent::CountChanged]);

        // Clearing an empty cart is fine too
        cart.clear_cart();
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_zero_quantity_lines_dropped_on_read() {
        let cart = service();
        cart.store()
            .set_item(CART_KEY, r#"[{"id": 1, "quantity": 0}, {"id": 2, "quantity": 1}]"#)
            .unwrap();

        let lines = cart.cart();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id(), ProductId::new(2));
    }

    #[test]
    fn test_null_quantity_reads_as_one() {
        let cart = service();
        cart.store()
            .set_item(
                CART_KEY,
                r#"[{"id": 1, "name": "a", "price": 10, "quantity": 2},
                    {"id": 2, "name": "legacy", "price": 5, "quantity": null}]"#,
            )
            .unwrap();

        let lines = cart.cart();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].quantity, 1);
        assert_eq!(cart.cart_count(), 3);
        assert_eq!(cart.cart_total(), Decimal::from(25));

        cart.add_to_cart(product(2, "legacy", 5));
        let value = stored(&cart);
        assert_eq!(value[0]["quantity"], 2);
        assert_eq!(value[1]["quantity"], 2);
    }

    #[test]
    fn test_bad_line_does_not_empty_cart() {
        let cart = service();
        cart.store()
            .set_item(
                CART_KEY,
                r#"[{"id": 1, "quantity": -1}, {"id": 2, "quantity": 1.5},
                    {"id": 3, "name": "kept", "quantity": 4}, "junk"]"#,
            )
            .unwrap();

        let lines = cart.cart();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].id(), ProductId::new(3));

        cart.update_quantity(ProductId::new(3), 1);
        assert_eq!(cart.cart_count(), 5);
    }

    #[test]
    fn test_unknown_stored_fields_survive_mutation() {
        let cart = service();
        cart.store()
            .set_item(CART_KEY, r#"[{"id": 1, "quantity": 1, "color": "red"}]"#)
            .unwrap();

        cart.add_to_cart(ProductSnapshot::new(ProductId::new(1)));

        let value = stored(&cart);
        assert_eq!(value[0]["color"], "red");
        assert_eq!(value[0]["quantity"], 2);
    }

    #[test]
    fn test_failed_write_is_swallowed_and_leaves_stale_copy() {
        let store = MemoryStore::with_quota(60);
        let cart = CartService::new(&store);
        cart.add_to_cart(ProductSnapshot::new(ProductId::new(1)));
        let before = cart.cart();

        // Long name pushes the serialized cart past the quota
        cart.add_to_cart(product(2, &"x".repeat(100), 1));

        assert_eq!(cart.cart(), before);
    }

    #[test]
    fn test_write_failure_still_emits_signals() {
        let cart = CartService::with_observer(BrokenStore, EventLog::new());
        cart.add_to_cart(product(1, "a", 1));
        assert_eq!(cart.observer().count_refreshes(), 1);
        assert!(cart.cart().is_empty());
    }

    #[test]
    fn test_order_submission() {
        let cart = service();
        cart.add_to_cart(product(1, "a", 30));
        cart.add_to_cart(product(1, "a", 30));
        cart.add_to_cart(product(2, "b", 5));

        let now = Utc::now();
        let order = cart.order_submission(now).unwrap();
        assert_eq!(order.cart.len(), 2);
        assert_eq!(order.total, Decimal::from(65));
        assert_eq!(order.timestamp, now);
    }

    #[test]
    fn test_order_submission_empty_cart() {
        let cart = service();
        assert_eq!(cart.order_submission(Utc::now()), Err(CartError::EmptyCart));

        let notifications = cart.observer().notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].severity, Severity::Error);
    }

    #[test]
    fn test_line_total_missing_price_is_zero() {
        let line = CartLineItem::new(ProductSnapshot::new(ProductId::new(1))).with_quantity(3);
        assert_eq!(line.line_total(), Decimal::ZERO);
    }

    fn line_strategy() -> impl Strategy<Value = Vec<CartLineItem>> {
        prop::collection::hash_set(any::<i32>(), 0..16).prop_flat_map(|ids| {
            let ids: Vec<i32> = ids.into_iter().collect();
            let len = ids.len();
            (
                Just(ids),
                prop::collection::vec((1u32..1000, 0i64..100_000), len),
            )
                .prop_map(|(ids, attrs)| {
                    ids.into_iter()
                        .zip(attrs)
                        .map(|(id, (quantity, price))| {
                            CartLineItem::new(
                                ProductSnapshot::new(ProductId::new(id))
                                    .with_name(format!("product-{id}"))
                                    .with_price(Decimal::from(price)),
                            )
                            .with_quantity(quantity)
                        })
                        .collect()
                })
        })
    }

    proptest! {
        /// Saving a cart and reading it back yields the same lines in order.
        #[test]
        fn save_then_read_round_trips(lines in line_strategy()) {
            let cart = CartService::new(MemoryStore::new());
            cart.save_cart(&lines);
            prop_assert_eq!(cart.cart(), lines);
        }

        /// Adding distinct products yields one line per product, each with quantity 1.
        #[test]
        fn distinct_adds_yield_single_units(ids in prop::collection::hash_set(any::<i32>(), 0..32)) {
            let cart = CartService::new(MemoryStore::new());
            for id in &ids {
                cart.add_to_cart(ProductSnapshot::new(ProductId::new(*id)));
            }

            let lines = cart.cart();
            prop_assert_eq!(lines.len(), ids.len());
            prop_assert!(lines.iter().all(|line| line.quantity == 1));
            prop_assert_eq!(cart.cart_count(), ids.len() as u64);
        }

        /// Decrementing by at least the current quantity removes the line.
        #[test]
        fn large_decrement_removes_line(adds in 1u32..10, extra in 0i64..10) {
            let cart = CartService::new(MemoryStore::new());
            let id = ProductId::new(1);
            for _ in 0..adds {
                cart.add_to_cart(ProductSnapshot::new(id));
            }

            cart.update_quantity(id, -(i64::from(adds) + extra));
            prop_assert!(cart.cart().iter().all(|line| line.id() != id));
        }
    }
}
