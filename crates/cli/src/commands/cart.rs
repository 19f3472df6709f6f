//! `tinyshop cart ...`
//!
//! The cart lives in a local [`FileStore`]. Each command runs one cart
//! operation, then prints the notifications it raised and, if the item
//! count changed, the new count.

use std::io::Write;

use chrono::Utc;

use tinyshop_core::{
    CartEvent, CartService, EventLog, OrderAck, ProductId, Severity, count_items, total_price,
};

use super::{CommandError, Result};
use crate::client::CatalogClient;
use crate::file_store::FileStore;

type FileCart<'a> = CartService<&'a FileStore, &'a EventLog>;

/// Run `operation` against the file cart and report its events.
fn with_cart<T>(
    store: &FileStore,
    out: &mut impl Write,
    operation: impl FnOnce(&FileCart<'_>) -> T,
) -> Result<T> {
    let events = EventLog::new();
    let cart = CartService::with_observer(store, &events);
    let output = operation(&cart);

    let mut count_changed = false;
    for event in events.drain() {
        match event {
            CartEvent::Notification(notification) => match notification.severity {
                Severity::Success => writeln!(out, "{}", notification.message)?,
                Severity::Error => writeln!(out, "error: {}", notification.message)?,
            },
            CartEvent::CountChanged => count_changed = true,
        }
    }
    if count_changed {
        writeln!(out, "Cart: {} item(s)", cart.cart_count())?;
    }

    Ok(output)
}

/// Print the cart contents with line totals.
///
/// # Errors
///
/// Returns `CommandError::Output` if output cannot be written.
pub fn show(store: &FileStore, out: &mut impl Write) -> Result<()> {
    let items = CartService::new(store).cart();

    if items.is_empty() {
        writeln!(out, "Cart is empty")?;
        return Ok(());
    }

    for item in &items {
        writeln!(
            out,
            "{:>4}  {:>3} x {:<28} {:>10}",
            item.id(),
            item.quantity,
            item.name().unwrap_or("Unknown item"),
            item.line_total()
        )?;
    }
    writeln!(
        out,
        "Total: {} ({} item(s))",
        total_price(&items),
        count_items(&items)
    )?;
    Ok(())
}

/// Fetch a product from the catalog and add one unit of it.
///
/// # Errors
///
/// Returns `CommandError::ProductNotFound` for unknown IDs, or a client
/// error if the catalog cannot be reached.
pub async fn add(
    client: &CatalogClient,
    store: &FileStore,
    id: ProductId,
    out: &mut impl Write,
) -> Result<()> {
    let product = client
        .get_product(id)
        .await?
        .ok_or(CommandError::ProductNotFound(id))?;

    if !product.in_stock {
        tracing::warn!(%id, "Adding a product that is out of stock");
    }

    with_cart(store, out, |cart| cart.add_to_cart(product))
}

/// Change a line's quantity by `delta`.
///
/// # Errors
///
/// Returns `CommandError::Output` if output cannot be written.
pub fn update(store: &FileStore, id: ProductId, delta: i64, out: &mut impl Write) -> Result<()> {
    with_cart(store, out, |cart| cart.update_quantity(id, delta))
}

/// Remove a line.
///
/// # Errors
///
/// Returns `CommandError::Output` if output cannot be written.
pub fn remove(store: &FileStore, id: ProductId, out: &mut impl Write) -> Result<()> {
    with_cart(store, out, |cart| cart.remove_item(id))
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CommandError::Output` if output cannot be written.
pub fn clear(store: &FileStore, out: &mut impl Write) -> Result<()> {
    with_cart(store, out, |cart| cart.clear_cart())
}

/// Submit the cart as an order and clear it.
///
/// An empty cart prints an error notification and submits nothing. If the
/// storefront cannot take the order it is completed in demo mode; the cart
/// is cleared either way.
///
/// # Errors
///
/// Returns `CommandError::Output` if output cannot be written.
pub async fn checkout(client: &CatalogClient, store: &FileStore, out: &mut impl Write) -> Result<()> {
    let Ok(order) = with_cart(store, out, |cart| cart.order_submission(Utc::now()))? else {
        return Ok(());
    };

    let ack = match client.submit_order(&order).await {
        Ok(ack) => ack,
        Err(e) => {
            tracing::warn!(error = %e, "Order submission failed, completing in demo mode");
            OrderAck::demo()
        }
    };

    match ack.order_id {
        Some(order_id) => writeln!(out, "{}, order number {order_id}", ack.message)?,
        None => writeln!(out, "{}", ack.message)?,
    }

    with_cart(store, out, |cart| cart.clear_cart())
}
