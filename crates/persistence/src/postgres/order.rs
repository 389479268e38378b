use std::collections::HashMap;

use async_trait::async_trait;
use common::OrderId;
use domain::{Money, Order, OrderItem};
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};

use super::{map_insert_error, to_u32};
use crate::{PersistenceError, Result, repository::Repository};

const SELECT_ITEMS: &str =
    "SELECT id, order_id, product_id, name, price, quantity FROM order_items";

/// PostgreSQL repository for orders and their items.
///
/// An order is one `orders` row plus one `order_items` row per item. Writes
/// touch both tables inside a single transaction, and an update replaces the
/// whole item set. Items are read back in the order they were stored.
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_item(row: &PgRow) -> Result<OrderItem> {
        let id: String = row.try_get("id")?;
        let product_id: String = row.try_get("product_id")?;
        let name: String = row.try_get("name")?;
        let price: i64 = row.try_get("price")?;
        let quantity: i64 = row.try_get("quantity")?;

        Ok(OrderItem::new(
            id,
            product_id,
            name,
            Money::from_cents(price),
            to_u32(quantity, "quantity")?,
        )?)
    }

    async fn insert_items(tx: &mut Transaction<'_, Postgres>, order: &Order) -> Result<()> {
        for (position, item) in order.items().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, price, quantity, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(item.id().as_str())
            .bind(order.id().as_str())
            .bind(item.product_id().as_str())
            .bind(item.name())
            .bind(item.price().cents())
            .bind(i64::from(item.quantity()))
            .bind(position as i32)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Order> for PgOrderRepository {
    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id(), items = entity.item_count()))]
    async fn create(&self, entity: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)")
            .bind(entity.id().as_str())
            .bind(entity.customer_id().as_str())
            .bind(entity.total().cents())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_insert_error(e, "Order", entity.id()))?;

        Self::insert_items(&mut tx, entity).await?;

        tx.commit().await?;
        metrics::counter!("repository_writes", "entity" => "Order").increment(1);
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Order> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PersistenceError::not_found("Order", id))?;

        let item_rows = sqlx::query(&format!(
            "{SELECT_ITEMS} WHERE order_id = $1 ORDER BY position ASC"
        ))
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await?;

        let items = item_rows
            .iter()
            .map(Self::row_to_item)
            .collect::<Result<Vec<_>>>()?;
        let customer_id: String = row.try_get("customer_id")?;

        Ok(Order::with_id(id.clone(), customer_id, items)?)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let order_rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        let item_rows = sqlx::query(&format!("{SELECT_ITEMS} ORDER BY order_id, position ASC"))
            .fetch_all(&self.pool)
            .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let order_id: String = row.try_get("order_id")?;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(Self::row_to_item(row)?);
        }

        order_rows
            .into_iter()
            .map(|row| -> Result<Order> {
                let id: String = row.try_get("id")?;
                let customer_id: String = row.try_get("customer_id")?;
                let items = items_by_order.remove(&id).unwrap_or_default();
                Ok(Order::with_id(id, customer_id, items)?)
            })
            .collect()
    }

    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id(), items = entity.item_count()))]
    async fn update(&self, entity: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET customer_id = $2, total = $3 WHERE id = $1")
            .bind(entity.id().as_str())
            .bind(entity.customer_id().as_str())
            .bind(entity.total().cents())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("Order", entity.id()));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(entity.id().as_str())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, entity).await?;

        tx.commit().await?;
        metrics::counter!("repository_writes", "entity" => "Order").increment(1);
        Ok(())
    }
}
