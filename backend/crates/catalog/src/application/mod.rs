//! Application Layer

pub mod config;
pub mod orders;
pub mod products;

pub use config::CatalogConfig;
pub use orders::{
    CreateOrderInput, CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
};
pub use products::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductUseCase,
};
