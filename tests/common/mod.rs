//! Common test utilities

use anyhow::Result;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::env;
use std::sync::Once;

static ENV_INIT: Once = Once::new();

fn init_env() {
    ENV_INIT.call_once(|| {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();
    });
}

/// Connect to the test database. Tests skip themselves when this fails.
pub async fn get_test_pool() -> Result<MySqlPool> {
    init_env();

    let url = env::var("TEST_DATABASE_URL").or_else(|_| env::var("DATABASE_URL"))?;
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;
    Ok(pool)
}

/// Apply migrations to the test database
pub async fn setup_database(pool: &MySqlPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Remove rows for users whose email starts with the given prefix.
///
/// Tests run in parallel against a shared database, so each test owns a
/// distinct email prefix instead of wiping whole tables.
pub async fn cleanup_users_with_prefix(pool: &MySqlPool, prefix: &str) -> Result<()> {
    let pattern = format!("{prefix}%");
    sqlx::query(
        "DELETE FROM zones WHERE user_id IN (SELECT id FROM users WHERE email LIKE ?)",
    )
    .bind(&pattern)
    .execute(pool)
    .await?;
    sqlx::query("DELETE FROM users WHERE email LIKE ?")
        .bind(&pattern)
        .execute(pool)
        .await?;
    Ok(())
}
