//! `tinyshop products ...`

use std::io::Write;

use tinyshop_core::{Product, ProductId};

use super::{CommandError, Result};
use crate::client::CatalogClient;

const fn stock_label(in_stock: bool) -> &'static str {
    if in_stock { "in stock" } else { "out of stock" }
}

/// Print one line per catalog product.
///
/// # Errors
///
/// Returns `CommandError` if the catalog cannot be fetched.
pub async fn list(client: &CatalogClient, out: &mut impl Write) -> Result<()> {
    let products = client.list_products().await?;

    if products.is_empty() {
        writeln!(out, "No products")?;
        return Ok(());
    }

    for product in &products {
        writeln!(
            out,
            "{:>4}  {:<28} {:>10}  {}",
            product.id,
            product.name,
            product.price,
            stock_label(product.in_stock)
        )?;
    }
    Ok(())
}

/// Print the details of one product.
///
/// # Errors
///
/// Returns `CommandError::ProductNotFound` for unknown IDs, or a client
/// error if the catalog cannot be reached.
pub async fn show(client: &CatalogClient, id: ProductId, out: &mut impl Write) -> Result<()> {
    let product = client
        .get_product(id)
        .await?
        .ok_or(CommandError::ProductNotFound(id))?;

    write_details(&product, out)?;
    Ok(())
}

fn write_details(product: &Product, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{} (#{})", product.name, product.id)?;
    writeln!(out, "Price:    {}", product.price)?;
    writeln!(out, "Category: {}", product.category)?;
    writeln!(out, "Stock:    {}", stock_label(product.in_stock))?;
    writeln!(out, "Image:    {}", product.image)?;

    if !product.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", product.description)?;
    }

    if !product.features.is_empty() {
        writeln!(out)?;
        for feature in &product.features {
            writeln!(out, "  - {feature}")?;
        }
    }
    Ok(())
}
