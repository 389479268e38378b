//! Storefront entry point: migrate the database and run the sample flow.

use std::sync::Arc;

use app::{AppError, Config, Storefront};
use persistence::{PgCustomerRepository, PgOrderRepository, PgProductRepository, run_migrations};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Configuration and tracing
    let config = Config::from_env();
    app::telemetry::init_tracing(&config);

    // 2. Database
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    run_migrations(&pool).await?;
    tracing::info!(max_connections = config.max_connections, "database ready");

    // 3. Services sharing the default handlers
    let dispatcher = Arc::new(app::default_dispatcher());
    let storefront = Storefront::new(
        PgCustomerRepository::new(pool.clone()),
        PgProductRepository::new(pool.clone()),
        PgOrderRepository::new(pool.clone()),
        dispatcher,
    );

    // 4. Sample flow
    let run_id = uuid::Uuid::new_v4().simple().to_string();
    let run = storefront.run_sample(&run_id).await?;
    tracing::info!(
        customer_id = %run.customer_id,
        order_id = %run.order.id(),
        total = %run.order.total(),
        reward_points = %run.reward_points,
        "sample run finished"
    );

    pool.close().await;
    Ok(())
}
