//! PostgreSQL Repository Implementation
//!
//! One repository type backs both catalog traits. Orders join products with
//! a LEFT JOIN so that an order whose product was deleted still reads back,
//! with the product columns NULL.

use kernel::id::{OrderId, ProductId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::order::{Order, OrderDetail, OrderLine};
use crate::domain::product::{Product, ProductChanges};
use crate::domain::repository::{OrderRepository, ProductRepository};
use crate::error::CatalogResult;

/// PostgreSQL-backed product and order repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                name,
                price,
                product_image
            FROM products
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProductRow::into_product).collect())
    }

    async fn find_by_id(&self, product_id: &ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT
                product_id,
                name,
                price,
                product_image
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProductRow::into_product))
    }

    async fn insert(&self, product: &Product) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                product_id,
                name,
                price,
                product_image
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.product_id.as_uuid())
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.product_image)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_fields(
        &self,
        product_id: &ProductId,
        changes: &ProductChanges,
    ) -> CatalogResult<u64> {
        // COALESCE keeps untouched columns; matches the per-record atomic
        // update the store offers
        let matched = sqlx::query(
            r#"
            UPDATE products SET
                name = COALESCE($2, name),
                price = COALESCE($3, price),
                product_image = COALESCE($4, product_image)
            WHERE product_id = $1
            "#,
        )
        .bind(product_id.as_uuid())
        .bind(&changes.name)
        .bind(changes.price)
        .bind(&changes.product_image)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(matched)
    }

    async fn delete_by_id(&self, product_id: &ProductId) -> CatalogResult<u64> {
        let deleted = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

impl OrderRepository for PgCatalogRepository {
    async fn find_all(&self) -> CatalogResult<Vec<OrderLine>> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT
                o.order_id,
                o.quantity,
                p.product_id,
                p.name AS product_name
            FROM orders o
            LEFT JOIN products p ON p.product_id = o.product_id
            ORDER BY o.order_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(OrderLineRow::into_order_line).collect())
    }

    async fn find_by_id(&self, order_id: &OrderId) -> CatalogResult<Option<OrderDetail>> {
        let row = sqlx::query_as::<_, OrderDetailRow>(
            r#"
            SELECT
                o.order_id,
                o.quantity,
                p.product_id,
                p.name AS product_name,
                p.price AS product_price,
                p.product_image
            FROM orders o
            LEFT JOIN products p ON p.product_id = o.product_id
            WHERE o.order_id = $1
            "#,
        )
        .bind(order_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(OrderDetailRow::into_order_detail))
    }

    async fn insert(&self, order: &Order) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO orders (
                order_id,
                product_id,
                quantity
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(order.order_id.as_uuid())
        .bind(order.product_id.as_uuid())
        .bind(order.quantity)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_by_id(&self, order_id: &OrderId) -> CatalogResult<u64> {
        let deleted = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(order_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    name: String,
    price: f64,
    product_image: Option<String>,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            product_id: ProductId::from_uuid(self.product_id),
            name: self.name,
            price: self.price,
            product_image: self.product_image,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderLineRow {
    order_id: Uuid,
    quantity: i32,
    product_id: Option<Uuid>,
    product_name: Option<String>,
}

impl OrderLineRow {
    fn into_order_line(self) -> OrderLine {
        OrderLine {
            order_id: OrderId::from_uuid(self.order_id),
            quantity: self.quantity,
            product: self
                .product_id
                .zip(self.product_name)
                .map(|(id, name)| (ProductId::from_uuid(id), name)),
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderDetailRow {
    order_id: Uuid,
    quantity: i32,
    product_id: Option<Uuid>,
    product_name: Option<String>,
    product_price: Option<f64>,
    product_image: Option<String>,
}

impl OrderDetailRow {
    fn into_order_detail(self) -> OrderDetail {
        let product = match (self.product_id, self.product_name, self.product_price) {
            (Some(id), Some(name), Some(price)) => Some(Product {
                product_id: ProductId::from_uuid(id),
                name,
                price,
                product_image: self.product_image,
            }),
            _ => None,
        };

        OrderDetail {
            order_id: OrderId::from_uuid(self.order_id),
            quantity: self.quantity,
            product,
        }
    }
}
