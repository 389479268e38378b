use async_trait::async_trait;
use common::CustomerId;
use domain::{Address, Customer, Money};
use sqlx::{PgPool, Row, postgres::PgRow};

use super::{map_insert_error, to_u32};
use crate::{PersistenceError, Result, repository::Repository};

const SELECT_CUSTOMER: &str =
    "SELECT id, name, street, number, zipcode, city, active, reward_points FROM customers";

/// PostgreSQL repository for customers.
///
/// The address is flattened into nullable columns; a customer row either has
/// all four address columns set or none.
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_customer(row: PgRow) -> Result<Customer> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let street: Option<String> = row.try_get("street")?;
        let number: Option<i64> = row.try_get("number")?;
        let zipcode: Option<String> = row.try_get("zipcode")?;
        let city: Option<String> = row.try_get("city")?;
        let active: bool = row.try_get("active")?;
        let reward_points: i64 = row.try_get("reward_points")?;

        let mut customer = Customer::new(id, name)?;
        if let (Some(street), Some(number), Some(zipcode), Some(city)) =
            (street, number, zipcode, city)
        {
            let number = to_u32(number, "number")?;
            customer.change_address(Address::new(street, number, zipcode, city)?);
        }
        if active {
            customer.activate()?;
        }
        customer.add_reward_points(Money::from_cents(reward_points));

        Ok(customer)
    }
}

#[async_trait]
impl Repository<Customer> for PgCustomerRepository {
    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn create(&self, entity: &Customer) -> Result<()> {
        let address = entity.address();

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entity.id().as_str())
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points().cents())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(e, "Customer", entity.id()))?;

        metrics::counter!("repository_writes", "entity" => "Customer").increment(1);
        Ok(())
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Customer> {
        let row = sqlx::query(&format!("{SELECT_CUSTOMER} WHERE id = $1"))
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Self::row_to_customer(row),
            None => Err(PersistenceError::not_found("Customer", id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(&format!("{SELECT_CUSTOMER} ORDER BY seq ASC"))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_customer).collect()
    }

    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn update(&self, entity: &Customer) -> Result<()> {
        let address = entity.address();

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, street = $3, number = $4, zipcode = $5, city = $6,
                active = $7, reward_points = $8
            WHERE id = $1
            "#,
        )
        .bind(entity.id().as_str())
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points().cents())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(PersistenceError::not_found("Customer", entity.id()));
        }

        metrics::counter!("repository_writes", "entity" => "Customer").increment(1);
        Ok(())
    }
}
