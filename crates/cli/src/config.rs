//! CLI configuration.
//!
//! Values come from command-line flags, falling back to environment
//! variables (and a `.env` file, loaded in `main`):
//!
//! - `TINYSHOP_API_URL` - Storefront base URL (default: <http://127.0.0.1:3000>)
//! - `TINYSHOP_CART_FILE` - Local cart file (default: .tinyshop-cart.json)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default storefront address.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Default cart file, relative to the working directory.
pub const DEFAULT_CART_FILE: &str = ".tinyshop-cart.json";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL {url:?}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API URL must use http or https, got {0}")]
    UnsupportedScheme(String),
}

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Storefront base URL, always ending in `/`
    pub api_url: Url,
    /// Where the local cart is kept
    pub cart_file: PathBuf,
}

impl CliConfig {
    /// Validate raw settings.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `api_url` is not an absolute http(s) URL.
    pub fn new(api_url: &str, cart_file: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut url = Url::parse(api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            source,
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        // Relative joins replace the last path segment unless it ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            api_url: url,
            cart_file: cart_file.into(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = CliConfig::new(DEFAULT_API_URL, DEFAULT_CART_FILE).unwrap();
        assert_eq!(config.api_url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(config.cart_file, PathBuf::from(".tinyshop-cart.json"));
    }

    #[test]
    fn test_path_prefix_gets_trailing_slash() {
        let config = CliConfig::new("https://shop.example.com/demo", "cart.json").unwrap();
        assert_eq!(config.api_url.as_str(), "https://shop.example.com/demo/");
        assert_eq!(
            config.api_url.join("api/products").unwrap().as_str(),
            "https://shop.example.com/demo/api/products"
        );
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            CliConfig::new("not a url", "cart.json"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            CliConfig::new("ftp://example.com", "cart.json"),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }
}
