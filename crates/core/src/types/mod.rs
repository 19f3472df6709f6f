//! Core types for tinyshop.
//!
//! This module provides the catalog record and type-safe identifiers.

pub mod id;
pub mod product;

pub use id::*;
pub use product::{Product, ProductSnapshot};
