//! Repository Traits
//!
//! Interfaces for catalog persistence. Implementations are in the
//! infrastructure layer; per-record atomic reads and writes only.

use kernel::id::{OrderId, ProductId};

use crate::domain::order::{Order, OrderDetail, OrderLine};
use crate::domain::product::{Product, ProductChanges};
use crate::error::CatalogResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Find a product by id
    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>>;

    /// Persist a new product
    async fn insert(&self, product: &Product) -> CatalogResult<()>;

    /// Apply a partial update, returning the number of matched records
    async fn update_fields(
        &self,
        product_id: &ProductId,
        changes: &ProductChanges,
    ) -> CatalogResult<u64>;

    /// Delete a product by id, returning the number of removed records.
    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, product_id: &ProductId) -> CatalogResult<u64>;
}

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// All orders with their product names
    async fn find_all(&self) -> CatalogResult<Vec<OrderLine>>;

    /// Find an order with its full product
    async fn find_by_id(&self, order_id: &OrderId) -> CatalogResult<Option<OrderDetail>>;

    /// Persist a new order
    async fn insert(&self, order: &Order) -> CatalogResult<()>;

    /// Delete an order by id, returning the number of removed records
    async fn delete_by_id(&self, order_id: &OrderId) -> CatalogResult<u64>;
}
