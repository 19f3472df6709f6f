//! Catalog API handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use tinyshop_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every product in catalog order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.catalog().products().await?;
    Ok(Json(products.as_ref().clone()))
}

/// Show one product.
///
/// IDs that are not integers are treated like unknown IDs.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let not_found = || AppError::NotFound("Product not found".to_string());

    let id: ProductId = id.parse().map_err(|_| not_found())?;
    let product = state.catalog().product(id).await?.ok_or_else(not_found)?;

    Ok(Json(product))
}
