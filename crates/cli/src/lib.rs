//! tinyshop command-line client.
//!
//! Browses the storefront catalog over HTTP and keeps a cart in a local
//! JSON file, using the same cart manager as the storefront.
//!
//! # Modules
//!
//! - [`config`] - API URL and cart file settings
//! - [`client`] - HTTP client for the catalog and order endpoints
//! - [`file_store`] - File-backed key-value store for the cart
//! - [`commands`] - Subcommand implementations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod commands;
pub mod config;
pub mod file_store;

pub use client::{CatalogClient, ClientError};
pub use config::{CliConfig, ConfigError};
pub use file_store::{FileStore, FileStoreError};
