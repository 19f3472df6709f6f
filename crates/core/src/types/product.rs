//! Catalog product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;

/// A product as stored in the catalog file and served by `/api/products`.
///
/// Products are read-only at runtime; identity is [`Product::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, non-negative.
    pub price: Decimal,
    /// Path or URL of the product image.
    pub image: String,
    pub description: String,
    pub category: String,
    pub in_stock: bool,
    pub features: Vec<String>,
}

/// The product fields copied into a cart line.
///
/// Only `id` is required. Display fields are passed through untouched, so a
/// snapshot may be missing any of them; consumers must render defensively.
/// Unknown fields found in stored carts are kept in [`ProductSnapshot::extra`]
/// and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProductSnapshot {
    /// Create a snapshot carrying only an ID.
    #[must_use]
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            name: None,
            price: None,
            image: None,
            description: None,
            category: None,
            in_stock: None,
            features: None,
            extra: Map::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the unit price.
    #[must_use]
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl From<Product> for ProductSnapshot {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: Some(product.name),
            price: Some(product.price),
            image: Some(product.image),
            description: Some(product.description),
            category: Some(product.category),
            in_stock: Some(product.in_stock),
            features: Some(product.features),
            extra: Map::new(),
        }
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self::from(product.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CATALOG_ENTRY: &str = r#"{
        "id": 1,
        "name": "Frontend developer",
        "price": 120000,
        "image": "images/frontend.jpg",
        "description": "React and TypeScript",
        "category": "Development",
        "inStock": true,
        "features": ["Remote", "Full time"]
    }"#;

    #[test]
    fn test_product_deserializes_camel_case() {
        let product: Product = serde_json::from_str(CATALOG_ENTRY).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price, Decimal::from(120_000));
        assert!(product.in_stock);
        assert_eq!(product.features, vec!["Remote", "Full time"]);
    }

    #[test]
    fn test_product_serializes_in_stock_as_camel_case() {
        let product: Product = serde_json::from_str(CATALOG_ENTRY).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["inStock"], Value::Bool(true));
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_snapshot_from_product_copies_fields() {
        let product: Product = serde_json::from_str(CATALOG_ENTRY).unwrap();
        let snapshot = ProductSnapshot::from(&product);
        assert_eq!(snapshot.id, product.id);
        assert_eq!(snapshot.name.as_deref(), Some("Frontend developer"));
        assert_eq!(snapshot.price, Some(Decimal::from(120_000)));
        assert_eq!(snapshot.in_stock, Some(true));
    }

    #[test]
    fn test_snapshot_tolerates_missing_fields() {
        let snapshot: ProductSnapshot = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(snapshot, ProductSnapshot::new(ProductId::new(5)));
        assert_eq!(serde_json::to_string(&snapshot).unwrap(), r#"{"id":5}"#);
    }

    #[test]
    fn test_snapshot_keeps_unknown_fields() {
        let snapshot: ProductSnapshot =
            serde_json::from_str(r#"{"id": 5, "color": "red"}"#).unwrap();
        assert_eq!(snapshot.extra.get("color"), Some(&Value::from("red")));

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["color"], Value::from("red"));
    }
}
