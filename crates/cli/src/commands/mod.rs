//! Subcommand implementations.
//!
//! Commands write their human-readable output to any `io::Write` so they
//! can be driven from tests as well as from `main`.

pub mod cart;
pub mod products;

use std::io;

use thiserror::Error;

use tinyshop_core::ProductId;

use crate::client::ClientError;

/// Errors that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
