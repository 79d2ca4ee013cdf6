use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::db;
use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    info!("GET /health - Health check");
    db::ping(&state.pool).await.map_err(|e| {
        error!("Health check could not reach the store: {}", e);
        AppError::Db(e)
    })?;
    Ok(Json(json!({ "status": "ok" })))
}
