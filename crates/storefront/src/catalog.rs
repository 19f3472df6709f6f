//! Product catalog backed by a flat JSON file.
//!
//! The catalog file is an array of [`Product`] records. It is read-only at
//! runtime. Parsed products are cached with `moka` for the configured
//! time-to-live; without a TTL the file is read on every call.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use tinyshop_core::{Product, ProductId};

/// Errors loading the catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of products.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to the product catalog.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    path: PathBuf,
    cache: Option<Cache<(), Arc<Vec<Product>>>>,
}

impl Catalog {
    /// Create a catalog reading from `path`.
    ///
    /// A `ttl` of `None` disables caching.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, ttl: Option<Duration>) -> Self {
        let cache = ttl.map(|ttl| Cache::builder().max_capacity(1).time_to_live(ttl).build());

        Self {
            inner: Arc::new(CatalogInner {
                path: path.into(),
                cache,
            }),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// All products in file order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.inner.path.display()))]
    pub async fn products(&self) -> Result<Arc<Vec<Product>>, CatalogError> {
        if let Some(cache) = &self.inner.cache
            && let Some(products) = cache.get(&()).await
        {
            debug!("Cache hit for catalog");
            return Ok(products);
        }

        let products = Arc::new(self.load().await?);

        if let Some(cache) = &self.inner.cache {
            cache.insert((), Arc::clone(&products)).await;
        }

        Ok(products)
    }

    /// Look up one product by ID.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub async fn product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let products = self.products().await?;
        Ok(products.iter().find(|product| product.id == id).cloned())
    }

    /// Whether the catalog file can currently be loaded.
    pub async fn is_readable(&self) -> bool {
        self.load().await.is_ok()
    }

    async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        let path = &self.inner.path;
        let data = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;

        let products: Vec<Product> =
            serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
                path: path.clone(),
                source,
            })?;

        debug!(count = products.len(), "Loaded catalog");
        Ok(products)
    }
}
