//! API DTOs (Data Transfer Objects)
//!
//! Wire shapes for the product and order endpoints. Read views expose
//! `id`, `name` and `price` only; the stored image reference stays internal
//! except on the order detail view.

use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductChanges};
use crate::error::CatalogError;
use crate::presentation::links::RequestHint;

// ============================================================================
// Products
// ============================================================================

/// Product list response
#[derive(Debug, Clone, Serialize)]
pub struct ListProductsResponse {
    pub count: usize,
    pub products: Vec<ProductSummary>,
}

/// Product list item
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub request: RequestHint,
}

/// Create product request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub product_image: Option<String>,
}

/// Create product response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub message: &'static str,
    pub created_product: ProductSummary,
}

/// Single product view
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Single product response
#[derive(Debug, Clone, Serialize)]
pub struct GetProductResponse {
    pub product: ProductView,
    pub request: RequestHint,
}

/// One element of a PATCH body: `{"propName": "...", "value": ...}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOp {
    pub prop_name: String,
    pub value: serde_json::Value,
}

/// Fold a list of update operations into a partial product change set.
/// Later operations on the same property win. Unknown properties and
/// wrongly-typed values are rejected.
pub fn collect_changes(ops: Vec<UpdateOp>) -> Result<ProductChanges, CatalogError> {
    let mut changes = ProductChanges::default();

    for op in ops {
        match op.prop_name.as_str() {
            "name" => match op.value.as_str() {
                Some(name) => changes.name = Some(name.to_string()),
                None => {
                    return Err(CatalogError::InvalidUpdate(
                        "name must be a string".to_string(),
                    ));
                }
            },
            "price" => match op.value.as_f64() {
                Some(price) => changes.price = Some(price),
                None => {
                    return Err(CatalogError::InvalidUpdate(
                        "price must be a number".to_string(),
                    ));
                }
            },
            "productImage" => match op.value.as_str() {
                Some(image) => changes.product_image = Some(image.to_string()),
                None => {
                    return Err(CatalogError::InvalidUpdate(
                        "productImage must be a string".to_string(),
                    ));
                }
            },
            other => {
                return Err(CatalogError::InvalidUpdate(format!(
                    "unknown property: {other}"
                )));
            }
        }
    }

    Ok(changes)
}

/// `{message, request}` body for update and delete results
#[derive(Debug, Clone, Serialize)]
pub struct MessageWithHint {
    pub message: &'static str,
    pub request: RequestHint,
}

// ============================================================================
// Orders
// ============================================================================

/// Order list response
#[derive(Debug, Clone, Serialize)]
pub struct ListOrdersResponse {
    pub count: usize,
    pub orders: Vec<OrderSummary>,
}

/// Order list item; `product` is null when the product no longer exists
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    pub id: String,
    pub product: Option<OrderProductRef>,
    pub quantity: i32,
    pub request: RequestHint,
}

/// Reference to an ordered product, by id and name
#[derive(Debug, Clone, Serialize)]
pub struct OrderProductRef {
    pub id: String,
    pub name: String,
}

/// Create order request; quantity falls back to 1 when omitted
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

/// Create order response; `product` echoes the referenced product id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub message: &'static str,
    pub created_order: CreatedOrder,
    pub request: RequestHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedOrder {
    pub id: String,
    pub product: String,
    pub quantity: i32,
}

/// Single order response
#[derive(Debug, Clone, Serialize)]
pub struct GetOrderResponse {
    pub order: OrderView,
    pub request: RequestHint,
}

/// Single order view with the full product
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub id: String,
    pub product: Option<OrderProductView>,
    pub quantity: i32,
}

/// Full product as embedded in an order detail
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductView {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image: Option<String>,
}

impl OrderProductView {
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.product_id.to_string(),
            name: product.name,
            price: product.price,
            product_image: product.product_image,
        }
    }
}
