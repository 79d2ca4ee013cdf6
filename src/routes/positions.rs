use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use serde::Serialize;
use tracing::{error, info};

use super::{portfolio_url, render, FormView, POSITION_FIELDS};
use crate::errors::AppError;
use crate::flash::Flash;
use crate::models::{Portfolio, Position, PositionForm, Submission};
use crate::services::{portfolio_service, position_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/acao/nova/:portfolio_id",
            get(new_position_form).post(create_position),
        )
        .route(
            "/acao/editar/:id",
            get(edit_position_form).post(update_position),
        )
        .route("/acao/excluir/:id", get(delete_position))
}

#[derive(Debug, Serialize)]
struct NewPositionView {
    form: FormView,
    portfolio: Portfolio,
}

impl NewPositionView {
    fn new(portfolio: Portfolio) -> Self {
        Self {
            form: FormView {
                action: format!("/acao/nova/{}", portfolio.id),
                fields: POSITION_FIELDS,
            },
            portfolio,
        }
    }
}

#[derive(Debug, Serialize)]
struct EditPositionView {
    form: FormView,
    position: Position,
}

pub async fn new_position_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(portfolio_id): Path<i64>,
) -> Result<Response, AppError> {
    info!("GET /acao/nova/{} - Position form", portfolio_id);
    let portfolio = portfolio_service::fetch_one(&state.pool, portfolio_id)
        .await
        .map_err(|e| {
            error!("Failed to fetch portfolio {}: {}", portfolio_id, e);
            e
        })?;
    Ok(render(flash, NewPositionView::new(portfolio)))
}

pub async fn create_position(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(portfolio_id): Path<i64>,
    form: Result<Form<PositionForm>, FormRejection>,
) -> Result<Response, AppError> {
    info!("POST /acao/nova/{} - Adding position", portfolio_id);
    let Form(input) = form?;
    let submission = position_service::create(&state.pool, portfolio_id, input, &mut flash)
        .await
        .map_err(|e| {
            error!("Failed to add position to portfolio {}: {}", portfolio_id, e);
            e
        })?;

    match submission {
        Submission::Saved(_) => Ok(flash.redirect(&portfolio_url(portfolio_id))),
        Submission::Reprompt => {
            let portfolio = portfolio_service::fetch_one(&state.pool, portfolio_id).await?;
            Ok(render(flash, NewPositionView::new(portfolio)))
        }
    }
}

pub async fn edit_position_form(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    info!("GET /acao/editar/{} - Edit position form", id);
    let position = position_service::fetch_one(&state.pool, id).await.map_err(|e| {
        error!("Failed to fetch position {}: {}", id, e);
        e
    })?;
    Ok(render(
        flash,
        EditPositionView {
            form: FormView {
                action: format!("/acao/editar/{}", id),
                fields: POSITION_FIELDS,
            },
            position,
        },
    ))
}

pub async fn update_position(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(id): Path<i64>,
    form: Result<Form<PositionForm>, FormRejection>,
) -> Result<Response, AppError> {
    info!("POST /acao/editar/{} - Updating position", id);
    let Form(input) = form?;
    let position = position_service::update(&state.pool, id, input, &mut flash)
        .await
        .map_err(|e| {
            error!("Failed to update position {}: {}", id, e);
            e
        })?;
    Ok(flash.redirect(&portfolio_url(position.portfolio_id)))
}

pub async fn delete_position(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    info!("GET /acao/excluir/{} - Deleting position", id);
    let portfolio_id = position_service::delete(&state.pool, id, &mut flash)
        .await
        .map_err(|e| {
            error!("Failed to delete position {}: {}", id, e);
            e
        })?;
    Ok(flash.redirect(&portfolio_url(portfolio_id)))
}
