//! Order Use Cases
//!
//! Orders reference products many-to-one. The referential check happens
//! here, at creation time; the store does not enforce it, so a product can
//! disappear after its orders were placed.

use std::sync::Arc;

use kernel::id::{OrderId, ProductId};

use crate::domain::order::{Order, OrderDetail, OrderLine};
use crate::domain::repository::{OrderRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};

/// Input for creating an order
pub struct CreateOrderInput {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// List all orders with product names
pub struct ListOrdersUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<OrderLine>> {
        self.repo.find_all().await
    }
}

/// Create an order referencing an existing product
pub struct CreateOrderUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    products: Arc<P>,
    orders: Arc<O>,
}

impl<P, O> CreateOrderUseCase<P, O>
where
    P: ProductRepository,
    O: OrderRepository,
{
    pub fn new(products: Arc<P>, orders: Arc<O>) -> Self {
        Self { products, orders }
    }

    pub async fn execute(&self, input: CreateOrderInput) -> CatalogResult<Order> {
        // Referential check; only here, never at read time
        if self.products.find_by_id(&input.product_id).await?.is_none() {
            return Err(CatalogError::OrderProductNotFound);
        }

        let order = Order::new(input.product_id, input.quantity);
        self.orders.insert(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            product_id = %order.product_id,
            quantity = order.quantity,
            "Order created"
        );

        Ok(order)
    }
}

/// Fetch a single order with its full product
pub struct GetOrderUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order_id: OrderId) -> CatalogResult<OrderDetail> {
        self.repo
            .find_by_id(&order_id)
            .await?
            .ok_or(CatalogError::OrderNotFound)
    }
}

/// Delete an order
pub struct DeleteOrderUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> DeleteOrderUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Unlike products, order deletion checks existence first and answers
    /// 404 for a missing id (observed API behavior).
    pub async fn execute(&self, order_id: OrderId) -> CatalogResult<()> {
        if self.repo.find_by_id(&order_id).await?.is_none() {
            return Err(CatalogError::OrderNotFound);
        }

        self.repo.delete_by_id(&order_id).await?;
        tracing::info!(order_id = %order_id, "Order deleted");

        Ok(())
    }
}
