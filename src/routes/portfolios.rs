use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Form, Router};
use serde::Serialize;
use tracing::{error, info};

use super::{render, FormView, PORTFOLIO_FIELDS};
use crate::errors::AppError;
use crate::flash::Flash;
use crate::models::{PortfolioDetail, PortfolioForm, PortfolioSummary, Submission};
use crate::services::portfolio_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_portfolios))
        .route("/carteira/nova", get(new_portfolio_form).post(create_portfolio))
        .route("/carteira/:id", get(get_portfolio))
        .route("/carteira/excluir/:id", get(delete_portfolio))
}

#[derive(Debug, Serialize)]
struct PortfolioListView {
    portfolios: Vec<PortfolioSummary>,
}

#[derive(Debug, Serialize)]
struct PortfolioView {
    portfolio: PortfolioDetail,
}

#[derive(Debug, Serialize)]
struct NewPortfolioView {
    form: FormView,
}

fn new_portfolio_view() -> NewPortfolioView {
    NewPortfolioView {
        form: FormView {
            action: "/carteira/nova".to_string(),
            fields: PORTFOLIO_FIELDS,
        },
    }
}

pub async fn list_portfolios(
    State(state): State<AppState>,
    flash: Flash,
) -> Result<Response, AppError> {
    info!("GET / - Listing portfolios");
    let portfolios = portfolio_service::list(&state.pool).await.map_err(|e| {
        error!("Failed to list portfolios: {}", e);
        e
    })?;
    Ok(render(flash, PortfolioListView { portfolios }))
}

pub async fn get_portfolio(
    State(state): State<AppState>,
    flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    info!("GET /carteira/{} - Fetching portfolio", id);
    let portfolio = portfolio_service::detail(&state.pool, id).await.map_err(|e| {
        error!("Failed to fetch portfolio {}: {}", id, e);
        e
    })?;
    Ok(render(flash, PortfolioView { portfolio }))
}

pub async fn new_portfolio_form(flash: Flash) -> Response {
    info!("GET /carteira/nova - Portfolio form");
    render(flash, new_portfolio_view())
}

#[axum::debug_handler]
pub async fn create_portfolio(
    State(state): State<AppState>,
    mut flash: Flash,
    form: Result<Form<PortfolioForm>, FormRejection>,
) -> Result<Response, AppError> {
    info!("POST /carteira/nova - Creating portfolio");
    let Form(input) = form?;
    let submission = portfolio_service::create(&state.pool, input, &mut flash)
        .await
        .map_err(|e| {
            error!("Failed to create portfolio: {}", e);
            e
        })?;

    match submission {
        Submission::Saved(_) => Ok(flash.redirect("/")),
        Submission::Reprompt => Ok(render(flash, new_portfolio_view())),
    }
}

pub async fn delete_portfolio(
    State(state): State<AppState>,
    mut flash: Flash,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    info!("GET /carteira/excluir/{} - Deleting portfolio", id);
    portfolio_service::delete(&state.pool, id, &mut flash)
        .await
        .map_err(|e| {
            error!("Failed to delete portfolio {}: {}", id, e);
            e
        })?;
    Ok(flash.redirect("/"))
}

