//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::id::{OrderId, ProductId};

use crate::application::config::CatalogConfig;
use crate::application::{
    CreateOrderInput, CreateOrderUseCase, CreateProductInput, CreateProductUseCase,
    DeleteOrderUseCase, DeleteProductUseCase, GetOrderUseCase, GetProductUseCase,
    ListOrdersUseCase, ListProductsUseCase, UpdateProductUseCase,
};
use crate::domain::repository::{OrderRepository, ProductRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{
    CreateOrderRequest, CreateOrderResponse, CreateProductRequest, CreateProductResponse,
    CreatedOrder, GetOrderResponse, GetProductResponse, ListOrdersResponse, ListProductsResponse,
    MessageWithHint, OrderProductRef, OrderProductView, OrderSummary, OrderView, ProductSummary,
    ProductView, UpdateOp, collect_changes,
};
use crate::presentation::links::RequestHint;

/// Shared state for catalog handlers; one repository backs both resources
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CatalogConfig>,
}

// ============================================================================
// Products
// ============================================================================

/// GET /products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;

    let products: Vec<ProductSummary> = products
        .into_iter()
        .map(|p| ProductSummary {
            id: p.product_id.to_string(),
            name: p.name,
            price: p.price,
            request: RequestHint::product_detail(&state.config, p.product_id),
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ListProductsResponse {
            count: products.len(),
            products,
        }),
    ))
}

/// POST /products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CreateProductRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let product = CreateProductUseCase::new(state.repo.clone())
        .execute(CreateProductInput {
            name: req.name,
            price: req.price,
            product_image: req.product_image,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Created product successfully",
            created_product: ProductSummary {
                id: product.product_id.to_string(),
                name: product.name,
                price: product.price,
                request: RequestHint::product_detail(&state.config, product.product_id),
            },
        }),
    ))
}

/// GET /products/{productId}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let product_id: ProductId = parse_product_id(&product_id)?;

    let product = GetProductUseCase::new(state.repo.clone())
        .execute(product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(GetProductResponse {
            product: ProductView {
                id: product.product_id.to_string(),
                name: product.name,
                price: product.price,
            },
            request: RequestHint::all_products(&state.config),
        }),
    ))
}

/// PATCH /products/{productId}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
    Json(ops): Json<Vec<UpdateOp>>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let product_id: ProductId = parse_product_id(&product_id)?;
    let changes = collect_changes(ops)?;

    UpdateProductUseCase::new(state.repo.clone())
        .execute(product_id, changes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageWithHint {
            message: "Product updated",
            request: RequestHint::product(&state.config, product_id),
        }),
    ))
}

/// DELETE /products/{productId}
///
/// Answers the same success body whether or not the id matched a record.
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(product_id): Path<String>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let product_id: ProductId = parse_product_id(&product_id)?;

    DeleteProductUseCase::new(state.repo.clone())
        .execute(product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageWithHint {
            message: "Product deleted",
            request: RequestHint::create_product(&state.config),
        }),
    ))
}

// ============================================================================
// Orders
// ============================================================================

/// GET /orders
pub async fn list_orders<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let lines = ListOrdersUseCase::new(state.repo.clone()).execute().await?;

    let orders: Vec<OrderSummary> = lines
        .into_iter()
        .map(|line| OrderSummary {
            id: line.order_id.to_string(),
            product: line.product.map(|(id, name)| OrderProductRef {
                id: id.to_string(),
                name,
            }),
            quantity: line.quantity,
            request: RequestHint::order(&state.config, line.order_id),
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ListOrdersResponse {
            count: orders.len(),
            orders,
        }),
    ))
}

/// POST /orders
pub async fn create_order<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CreateOrderRequest>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    // A malformed product reference can never match, so it reads the same
    // as a missing product
    let product_id: ProductId = req
        .product_id
        .parse()
        .map_err(|_| CatalogError::OrderProductNotFound)?;

    let order = CreateOrderUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreateOrderInput {
            product_id,
            quantity: req.quantity,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created",
            created_order: CreatedOrder {
                id: order.order_id.to_string(),
                product: order.product_id.to_string(),
                quantity: order.quantity,
            },
            request: RequestHint::order(&state.config, order.order_id),
        }),
    ))
}

/// GET /orders/{orderId}
pub async fn get_order<R>(
    State(state): State<CatalogAppState<R>>,
    Path(order_id): Path<String>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let order_id: OrderId = parse_order_id(&order_id)?;

    let detail = GetOrderUseCase::new(state.repo.clone())
        .execute(order_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(GetOrderResponse {
            order: OrderView {
                id: detail.order_id.to_string(),
                product: detail.product.map(OrderProductView::from_product),
                quantity: detail.quantity,
            },
            request: RequestHint::all_orders(&state.config),
        }),
    ))
}

/// DELETE /orders/{orderId}
pub async fn delete_order<R>(
    State(state): State<CatalogAppState<R>>,
    Path(order_id): Path<String>,
) -> CatalogResult<impl IntoResponse>
where
    R: ProductRepository + OrderRepository + Clone + Send + Sync + 'static,
{
    let order_id: OrderId = parse_order_id(&order_id)?;

    DeleteOrderUseCase::new(state.repo.clone())
        .execute(order_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageWithHint {
            message: "Order deleted",
            request: RequestHint::create_order(&state.config),
        }),
    ))
}

// ============================================================================
// Path helpers
// ============================================================================

fn parse_product_id(raw: &str) -> CatalogResult<ProductId> {
    raw.parse().map_err(|_| CatalogError::InvalidId)
}

fn parse_order_id(raw: &str) -> CatalogResult<OrderId> {
    raw.parse().map_err(|_| CatalogError::InvalidId)
}
