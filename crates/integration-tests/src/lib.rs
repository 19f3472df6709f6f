//! End-to-end tests for tinyshop.
//!
//! Each test starts a real storefront on an ephemeral port, backed by a
//! temporary catalog file, and talks to it over HTTP.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tinyshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - Catalog, order, health, and static endpoints
//! - `session_cart` - Cookie-scoped cart API
//! - `cli_client` - CLI client and file cart against a live storefront

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use url::Url;

use tinyshop_storefront::{AppState, StorefrontConfig, app};

/// Catalog used by the tests unless one is passed explicitly.
pub const CATALOG: &str = r#"[
    {"id": 1, "name": "Canvas Tote Bag", "price": 1490, "image": "images/tote.jpg",
     "description": "Heavy cotton tote.", "category": "Bags", "inStock": true,
     "features": ["Cotton", "Inner pocket"]},
    {"id": 2, "name": "Ceramic Mug", "price": 890, "image": "images/mug.jpg",
     "description": "Stoneware mug.", "category": "Kitchen", "inStock": true,
     "features": ["350 ml", "Dishwasher safe"]},
    {"id": 3, "name": "Wool Beanie", "price": 1290, "image": "images/beanie.jpg",
     "description": "Merino beanie.", "category": "Apparel", "inStock": false,
     "features": []}
]"#;

/// A storefront serving on a local port.
///
/// The server task runs until the test's runtime shuts down.
pub struct TestServer {
    addr: SocketAddr,
    catalog: NamedTempFile,
}

impl TestServer {
    /// Start a storefront over [`CATALOG`].
    ///
    /// # Panics
    ///
    /// Panics if the catalog file or listener cannot be created.
    pub async fn start() -> Self {
        Self::with_catalog(CATALOG).await
    }

    /// Start a storefront over `catalog_json`.
    ///
    /// # Panics
    ///
    /// Panics if the catalog file or listener cannot be created.
    #[allow(clippy::expect_used)]
    pub async fn with_catalog(catalog_json: &str) -> Self {
        let mut catalog = NamedTempFile::new().expect("Failed to create catalog file");
        catalog
            .write_all(catalog_json.as_bytes())
            .expect("Failed to write catalog file");

        let config = StorefrontConfig {
            catalog_path: catalog.path().to_path_buf(),
            static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static")),
            catalog_ttl: None,
            ..StorefrontConfig::default()
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let router = app(AppState::new(config));
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                panic!("Test server failed: {e}");
            }
        });

        Self { addr, catalog }
    }

    /// Base URL, ending in `/`.
    ///
    /// # Panics
    ///
    /// Never in practice; the address is always a valid URL.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).expect("Invalid server URL")
    }

    /// Absolute URL for `path` (without a leading slash).
    ///
    /// # Panics
    ///
    /// Panics if `path` does not form a valid URL.
    #[allow(clippy::expect_used)]
    #[must_use]
    pub fn url(&self, path: &str) -> Url {
        self.base_url().join(path).expect("Invalid path")
    }

    /// Replace the catalog file contents.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_catalog(&self, contents: &str) {
        std::fs::write(self.catalog.path(), contents).expect("Failed to rewrite catalog");
    }

    /// Delete the catalog file, keeping its path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be removed.
    #[allow(clippy::expect_used)]
    pub fn remove_catalog(&self) {
        std::fs::remove_file(self.catalog.path()).expect("Failed to remove catalog");
    }
}

/// HTTP client with its own cookie jar, i.e. one browser.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[allow(clippy::expect_used)]
#[must_use]
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
