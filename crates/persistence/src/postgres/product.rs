use async_trait::async_trait;
use common::ProductId;
use domain::{Money, Product};
use sqlx::{PgPool, Row, postgres::PgRow};

use super::map_insert_error;
use crate::{PersistenceError, Result, repository::Repository};

/// PostgreSQL repository for products.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let price: i64 = row.try_get("price")?;

        Ok(Product::new(id, name, Money::from_cents(price))?)
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepository {
    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn create(&self, entity: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES ($1, $2, $3)")
            .bind(entity.id().as_str())
            .bind(entity.name())
            .bind(entity.price().cents())
            .execute(&self.pool)
            .await
            .map_err(|e| map_insert_error(e, "Product", entity.id()))?;

        metrics::counter!("repository_writes", "entity" => "Product").increment(1);
        Ok(())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::row_to_product(row),
            None => Err(PersistenceError::not_found("Product", id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn update(&self, entity: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(entity.id().as_str())
            .bind(entity.name())
            .bind(entity.price().cents())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("Product", entity.id()));
        }

        metrics::counter!("repository_writes", "entity" => "Product").increment(1);
        Ok(())
    }
}
