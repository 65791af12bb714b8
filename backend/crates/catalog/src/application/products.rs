//! Product Use Cases
//!
//! Single-record CRUD against the product store. Matching the observed API
//! behavior, update and delete do not check existence first: updating or
//! deleting a missing product still answers the success shape.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::product::{Product, ProductChanges};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

/// Input for creating a product
pub struct CreateProductInput {
    pub name: String,
    pub price: f64,
    pub product_image: Option<String>,
}

/// List all products
pub struct ListProductsUseCase<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> CatalogResult<Vec<Product>> {
        self.repo.find_all().await
    }
}

/// Create a product
pub struct CreateProductUseCase<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProductInput) -> CatalogResult<Product> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::InvalidProduct("name is required".to_string()));
        }
        if !input.price.is_finite() {
            return Err(CatalogError::InvalidProduct(
                "price must be a number".to_string(),
            ));
        }

        let product = Product::new(input.name, input.price, input.product_image);
        self.repo.insert(&product).await?;

        tracing::info!(product_id = %product.product_id, name = %product.name, "Product created");

        Ok(product)
    }
}

/// Fetch a single product
pub struct GetProductUseCase<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, product_id: ProductId) -> CatalogResult<Product> {
        self.repo
            .find_by_id(&product_id)
            .await?
            .ok_or(CatalogError::ProductNotFound)
    }
}

/// Apply a partial update to a product
pub struct UpdateProductUseCase<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        product_id: ProductId,
        changes: ProductChanges,
    ) -> CatalogResult<()> {
        if changes.is_empty() {
            return Err(CatalogError::InvalidUpdate("no fields to update".to_string()));
        }

        let matched = self.repo.update_fields(&product_id, &changes).await?;
        if matched == 0 {
            tracing::debug!(product_id = %product_id, "Update matched no product");
        }

        Ok(())
    }
}

/// Delete a product
pub struct DeleteProductUseCase<R: ProductRepository> {
    repo: Arc<R>,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, product_id: ProductId) -> CatalogResult<()> {
        let deleted = self.repo.delete_by_id(&product_id).await?;

        if deleted == 0 {
            tracing::debug!(product_id = %product_id, "Delete matched no product");
        } else {
            tracing::info!(product_id = %product_id, "Product deleted");
        }

        Ok(())
    }
}
