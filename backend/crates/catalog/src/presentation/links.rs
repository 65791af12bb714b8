//! Response Hyperlink Hints
//!
//! Every catalog response carries a `request` block telling the client which
//! related call to make next. The block is advisory; its `type`, `url`,
//! optional `description` and optional `body` template are part of the
//! stable wire contract.

use serde::Serialize;
use serde_json::json;

use crate::application::config::CatalogConfig;

/// A `request` hint block
#[derive(Debug, Clone, Serialize)]
pub struct RequestHint {
    /// HTTP verb of the suggested call
    #[serde(rename = "type")]
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub url: String,
    /// Body template for write calls, field names mapped to type names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RequestHint {
    /// Points at a single product; attached to list items and create results
    pub fn product_detail(config: &CatalogConfig, id: impl std::fmt::Display) -> Self {
        Self {
            method: "GET",
            description: Some("Get more details about this product"),
            url: config.product_url(id),
            body: None,
        }
    }

    /// Points at a single product without commentary; attached after updates
    pub fn product(config: &CatalogConfig, id: impl std::fmt::Display) -> Self {
        Self {
            method: "GET",
            description: None,
            url: config.product_url(id),
            body: None,
        }
    }

    /// Points at the product collection
    pub fn all_products(config: &CatalogConfig) -> Self {
        Self {
            method: "GET",
            description: Some("Get all products"),
            url: config.products_url(),
            body: None,
        }
    }

    /// Suggests creating a product; attached after deletions
    pub fn create_product(config: &CatalogConfig) -> Self {
        Self {
            method: "POST",
            description: Some("Create a new product"),
            url: config.products_url(),
            body: Some(json!({ "name": "String", "price": "Number" })),
        }
    }

    /// Points at a single order
    pub fn order(config: &CatalogConfig, id: impl std::fmt::Display) -> Self {
        Self {
            method: "GET",
            description: None,
            url: config.order_url(id),
            body: None,
        }
    }

    /// Points at the order collection
    pub fn all_orders(config: &CatalogConfig) -> Self {
        Self {
            method: "GET",
            description: None,
            url: config.orders_url(),
            body: None,
        }
    }

    /// Suggests creating an order; attached after deletions
    pub fn create_order(config: &CatalogConfig) -> Self {
        Self {
            method: "POST",
            description: None,
            url: config.orders_url(),
            body: Some(json!({ "productId": "ID", "quantity": "Number" })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CatalogConfig {
        CatalogConfig::new("http://localhost:3000")
    }

    #[test]
    fn test_detail_hint_shape() {
        let hint = serde_json::to_value(RequestHint::product_detail(&config(), "p1")).unwrap();
        assert_eq!(
            hint,
            serde_json::json!({
                "type": "GET",
                "description": "Get more details about this product",
                "url": "http://localhost:3000/products/p1"
            })
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let hint = serde_json::to_value(RequestHint::order(&config(), "o1")).unwrap();
        assert_eq!(
            hint,
            serde_json::json!({
                "type": "GET",
                "url": "http://localhost:3000/orders/o1"
            })
        );
    }

    #[test]
    fn test_create_hint_carries_body_template() {
        let hint = serde_json::to_value(RequestHint::create_product(&config())).unwrap();
        assert_eq!(hint["type"], "POST");
        assert_eq!(hint["body"]["name"], "String");
        assert_eq!(hint["body"]["price"], "Number");

        let hint = serde_json::to_value(RequestHint::create_order(&config())).unwrap();
        assert_eq!(hint["body"]["productId"], "ID");
        assert_eq!(hint["body"]["quantity"], "Number");
    }
}
