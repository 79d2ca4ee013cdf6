use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::errors::AppError;
use crate::flash::Flash;
use crate::models::{Portfolio, PortfolioDetail, PortfolioForm, PortfolioSummary, Submission};

pub async fn list(pool: &SqlitePool) -> Result<Vec<PortfolioSummary>, AppError> {
    let mut conn = pool.acquire().await?;
    let portfolios = db::portfolio_queries::fetch_all(&mut conn).await?;
    Ok(portfolios)
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Portfolio, AppError> {
    let mut conn = pool.acquire().await?;
    db::portfolio_queries::fetch_one(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn detail(pool: &SqlitePool, id: i64) -> Result<PortfolioDetail, AppError> {
    let mut tx = pool.begin().await?;
    let portfolio = db::portfolio_queries::fetch_one(&mut tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let positions = db::position_queries::fetch_by_portfolio(&mut tx, id).await?;
    tx.commit().await?;

    Ok(PortfolioDetail::new(portfolio, positions))
}

pub async fn create(
    pool: &SqlitePool,
    input: PortfolioForm,
    flash: &mut Flash,
) -> Result<Submission<Portfolio>, AppError> {
    if input.name.is_empty() {
        return Ok(Submission::Reprompt);
    }

    let mut conn = pool.acquire().await?;
    let portfolio = db::portfolio_queries::insert(&mut conn, &input.name).await?;
    info!("Created portfolio {} '{}'", portfolio.id, portfolio.name);
    flash.push("Carteira criada com sucesso!");

    Ok(Submission::Saved(portfolio))
}

/// Deletes the portfolio and all of its positions in one transaction.
pub async fn delete(pool: &SqlitePool, id: i64, flash: &mut Flash) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    if db::portfolio_queries::delete(&mut tx, id).await? == 0 {
        return Err(not_found(id));
    }
    tx.commit().await?;

    info!("Deleted portfolio {}", id);
    flash.push("Carteira excluída com sucesso!");
    Ok(())
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Portfolio {} not found", id))
}
