use sqlx::SqliteConnection;

use crate::models::{Position, PositionValues};

pub async fn insert(
    conn: &mut SqliteConnection,
    portfolio_id: i64,
    values: &PositionValues,
) -> Result<Position, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "INSERT INTO positions (portfolio_id, ticker, quantity, avg_price)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING id, portfolio_id, ticker, quantity, avg_price",
    )
    .bind(portfolio_id)
    .bind(&values.ticker)
    .bind(values.quantity)
    .bind(values.avg_price)
    .fetch_one(&mut *conn)
    .await
}

pub async fn fetch_one(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Position>, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "SELECT id, portfolio_id, ticker, quantity, avg_price
         FROM positions
         WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn fetch_by_portfolio(
    conn: &mut SqliteConnection,
    portfolio_id: i64,
) -> Result<Vec<Position>, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "SELECT id, portfolio_id, ticker, quantity, avg_price
         FROM positions
         WHERE portfolio_id = ?1
         ORDER BY id",
    )
    .bind(portfolio_id)
    .fetch_all(&mut *conn)
    .await
}

// The owning portfolio is never reassigned.
pub async fn update(
    conn: &mut SqliteConnection,
    id: i64,
    values: &PositionValues,
) -> Result<Option<Position>, sqlx::Error> {
    sqlx::query_as::<_, Position>(
        "UPDATE positions
         SET ticker = ?2, quantity = ?3, avg_price = ?4
         WHERE id = ?1
         RETURNING id, portfolio_id, ticker, quantity, avg_price",
    )
    .bind(id)
    .bind(&values.ticker)
    .bind(values.quantity)
    .bind(values.avg_price)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM positions WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
