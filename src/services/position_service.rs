use sqlx::SqlitePool;
use tracing::info;

use crate::db;
use crate::errors::AppError;
use crate::flash::Flash;
use crate::models::{Position, PositionForm, Submission};

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Position, AppError> {
    let mut conn = pool.acquire().await?;
    db::position_queries::fetch_one(&mut conn, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// The portfolio must exist even when the form comes back blank.
pub async fn create(
    pool: &SqlitePool,
    portfolio_id: i64,
    input: PositionForm,
    flash: &mut Flash,
) -> Result<Submission<Position>, AppError> {
    let mut tx = pool.begin().await?;
    db::portfolio_queries::fetch_one(&mut tx, portfolio_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {} not found", portfolio_id)))?;

    if input.has_blank_field() {
        return Ok(Submission::Reprompt);
    }
    let values = input.parse()?;

    let position = db::position_queries::insert(&mut tx, portfolio_id, &values).await?;
    tx.commit().await?;

    info!(
        "Added position {} ({}) to portfolio {}",
        position.id, position.ticker, portfolio_id
    );
    flash.push("Ação adicionada com sucesso!");
    Ok(Submission::Saved(position))
}

/// Overwrites ticker, quantity and price. Blank fields are not guarded:
/// a blank ticker is stored as is, blank numbers fail to parse.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    input: PositionForm,
    flash: &mut Flash,
) -> Result<Position, AppError> {
    let mut tx = pool.begin().await?;
    db::position_queries::fetch_one(&mut tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let values = input.parse()?;
    let position = db::position_queries::update(&mut tx, id, &values)
        .await?
        .ok_or_else(|| not_found(id))?;
    tx.commit().await?;

    info!("Updated position {} ({})", position.id, position.ticker);
    flash.push("Ação atualizada com sucesso!");
    Ok(position)
}

/// Returns the id of the portfolio the position belonged to.
pub async fn delete(pool: &SqlitePool, id: i64, flash: &mut Flash) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;
    let position = db::position_queries::fetch_one(&mut tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    db::position_queries::delete(&mut tx, id).await?;
    tx.commit().await?;

    info!("Deleted position {} from portfolio {}", id, position.portfolio_id);
    flash.push("Ação excluída com sucesso!");
    Ok(position.portfolio_id)
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Position {} not found", id))
}
