use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use carteiras::models::{PortfolioForm, PositionForm};

/// Fresh in-memory store with the schema applied. A single connection that
/// never expires keeps the in-memory database alive for the whole test.
#[allow(dead_code)]
pub async fn setup_test_db() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid in-memory database url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    carteiras::db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

#[allow(dead_code)]
pub fn portfolio_form(name: &str) -> PortfolioForm {
    PortfolioForm {
        name: name.to_string(),
    }
}

#[allow(dead_code)]
pub fn position_form(ticker: &str, quantity: &str, avg_price: &str) -> PositionForm {
    PositionForm {
        ticker: ticker.to_string(),
        quantity: quantity.to_string(),
        avg_price: avg_price.to_string(),
    }
}

#[allow(dead_code)]
pub async fn count_positions(pool: &SqlitePool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM positions")
        .fetch_one(pool)
        .await
        .expect("Failed to count positions");
    row.0
}
