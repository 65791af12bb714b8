//! Product Entity

use kernel::id::ProductId;

/// Product entity
#[derive(Debug, Clone)]
pub struct Product {
    pub product_id: ProductId,
    /// Display name, required and non-empty
    pub name: String,
    pub price: f64,
    /// Reference to an image location; stored but never returned in views
    pub product_image: Option<String>,
}

impl Product {
    /// Create a new product with a fresh identifier
    pub fn new(name: String, price: f64, product_image: Option<String>) -> Self {
        Self {
            product_id: ProductId::new(),
            name,
            price,
            product_image,
        }
    }
}

/// Partial update of product fields; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub product_image: Option<String>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.product_image.is_none()
    }
}
