//! Database connection pool initialization.
//!
//! Reads the connection string from `DATABASE_URL` and applies pending
//! migrations from `migrations/` before the pool is handed to the
//! application state.

use sqlx::PgPool;
use std::env;

/// Connects to PostgreSQL and runs pending migrations.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, the connection fails, or a
/// migration cannot be applied. Called once during startup.
pub async fn init_db_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    pool
}
