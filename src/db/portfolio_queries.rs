use sqlx::SqliteConnection;

use crate::models::{Portfolio, PortfolioSummary};

/// Every portfolio with the number of positions it holds.
pub async fn fetch_all(
    conn: &mut SqliteConnection,
) -> Result<Vec<PortfolioSummary>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioSummary>(
        "SELECT p.id, p.name, COUNT(a.id) AS position_count
         FROM portfolios p
         LEFT JOIN positions a ON a.portfolio_id = p.id
         GROUP BY p.id, p.name
         ORDER BY p.id",
    )
    .fetch_all(&mut *conn)
    .await
}

pub async fn fetch_one(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>("SELECT id, name FROM portfolios WHERE id = ?1")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn insert(conn: &mut SqliteConnection, name: &str) -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "INSERT INTO portfolios (name)
         VALUES (?1)
         RETURNING id, name",
    )
    .bind(name)
    .fetch_one(&mut *conn)
    .await
}

/// Removes the portfolio and every position it owns. Run inside a
/// transaction so both deletes commit together.
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    sqlx::query("DELETE FROM positions WHERE portfolio_id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    let result = sqlx::query("DELETE FROM portfolios WHERE id = ?1")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}
