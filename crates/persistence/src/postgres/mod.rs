//! PostgreSQL-backed repositories.

mod customer;
mod order;
mod product;

pub use customer::PgCustomerRepository;
pub use order::PgOrderRepository;
pub use product::PgProductRepository;

use sqlx::PgPool;

use crate::{PersistenceError, Result};

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// Maps a unique-constraint violation to `AlreadyExists`, anything else to `Database`.
pub(crate) fn map_insert_error(
    err: sqlx::Error,
    entity: &'static str,
    id: impl ToString,
) -> PersistenceError {
    if let sqlx::Error::Database(ref db_err) = err
        && db_err.is_unique_violation()
    {
        return PersistenceError::already_exists(entity, id);
    }
    PersistenceError::Database(err)
}

/// Converts a stored BIGINT back into an unsigned column value.
pub(crate) fn to_u32(value: i64, column: &str) -> Result<u32> {
    u32::try_from(value).map_err(|e| {
        PersistenceError::Database(sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
    })
}
