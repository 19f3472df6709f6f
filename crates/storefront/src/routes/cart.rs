//! Session cart handlers.
//!
//! Each browser session holds its own cart, stored the same way a browser
//! keeps it in local storage: one serialized string under the `cart` key.
//! All mutations go through [`tinyshop_core::CartService`]. Responses carry
//! the cart after the operation plus the events it raised, so the client
//! can show notifications and refresh its item count badge.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use tinyshop_core::{OrderAck, ProductId};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::session_cart::{CartResponse, with_session_cart};
use crate::state::AppState;

/// Request naming a single product.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub product_id: ProductId,
}

/// Quantity change request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub product_id: ProductId,
    pub delta: i64,
}

/// Cart count badge.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Display cart contents.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CartResponse>> {
    let ((), view) = with_session_cart(&session, state.config().cart_max_bytes, |_| ()).await?;
    Ok(Json(view))
}

/// Add one unit of a catalog product.
///
/// The product is looked up in the catalog and its current fields are
/// copied into the cart line.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ProductRequest>,
) -> Result<Json<CartResponse>> {
    let product = state
        .catalog()
        .product(request.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let product_id = product.id.to_string();
    add_breadcrumb("cart", "Added product", Some(&[("product_id", product_id.as_str())]));

    let ((), view) = with_session_cart(&session, state.config().cart_max_bytes, |cart| {
        cart.add_to_cart(&product);
    })
    .await?;
    Ok(Json(view))
}

/// Change a line's quantity; lines reaching zero are removed.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<CartResponse>> {
    let ((), view) = with_session_cart(&session, state.config().cart_max_bytes, |cart| {
        cart.update_quantity(request.product_id, request.delta);
    })
    .await?;
    Ok(Json(view))
}

/// Remove a line.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<ProductRequest>,
) -> Result<Json<CartResponse>> {
    let ((), view) = with_session_cart(&session, state.config().cart_max_bytes, |cart| {
        cart.remove_item(request.product_id);
    })
    .await?;
    Ok(Json(view))
}

/// Empty the cart.
#[instrument(skip(state, session))]
pub async fn clear(State(state): State<AppState>, session: Session) -> Result<Json<CartResponse>> {
    let ((), view) = with_session_cart(&session, state.config().cart_max_bytes, |cart| {
        cart.clear_cart();
    })
    .await?;
    Ok(Json(view))
}

/// Get cart count badge.
#[instrument(skip(state, session))]
pub async fn count(State(state): State<AppState>, session: Session) -> Result<Json<CountResponse>> {
    let (count, _) = with_session_cart(&session, state.config().cart_max_bytes, |cart| {
        cart.cart_count()
    })
    .await?;
    Ok(Json(CountResponse { count }))
}

/// Submit the session cart as an order and clear it.
///
/// Returns 400 when the cart is empty.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Json<OrderAck>> {
    let (submission, _) = with_session_cart(&session, state.config().cart_max_bytes, |cart| {
        let submission = cart.order_submission(Utc::now());
        if submission.is_ok() {
            cart.clear_cart();
        }
        submission
    })
    .await?;

    let order = submission.map_err(|e| AppError::BadRequest(e.to_string()))?;
    tracing::info!(
        lines = order.cart.len(),
        total = %order.total,
        "Session cart checked out"
    );

    Ok(Json(OrderAck::accepted()))
}
