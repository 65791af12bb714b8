//! Catalog Configuration
//!
//! Built once at process start; holds the public base URL used to render
//! the `request` hint blocks in responses.

/// Catalog application configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Public base URL of this API, without a trailing slash
    pub public_base_url: String,
}

impl CatalogConfig {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        let mut public_base_url = public_base_url.into();
        while public_base_url.ends_with('/') {
            public_base_url.pop();
        }
        Self { public_base_url }
    }

    /// URL of the product collection
    pub fn products_url(&self) -> String {
        format!("{}/products", self.public_base_url)
    }

    /// URL of a single product
    pub fn product_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/products/{}", self.public_base_url, id)
    }

    /// URL of the order collection
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.public_base_url)
    }

    /// URL of a single order
    pub fn order_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/orders/{}", self.public_base_url, id)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
