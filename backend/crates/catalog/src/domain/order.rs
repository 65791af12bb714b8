//! Order Entity and Read Models
//!
//! Order → Product is many-to-one. The reference is checked when the order
//! is created, not enforced by the store, so read models carry the product
//! as an `Option`.

use kernel::id::{OrderId, ProductId};

use crate::domain::product::Product;

/// Order entity
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i32,
}

impl Order {
    /// Create a new order with a fresh identifier
    pub fn new(product_id: ProductId, quantity: i32) -> Self {
        Self {
            order_id: OrderId::new(),
            product_id,
            quantity,
        }
    }
}

/// List view: order plus the name of the referenced product
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub quantity: i32,
    /// `None` when the product was deleted after the order was placed
    pub product: Option<(ProductId, String)>,
}

/// Detail view: order plus the full referenced product
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order_id: OrderId,
    pub quantity: i32,
    pub product: Option<Product>,
}
