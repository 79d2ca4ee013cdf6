pub(crate) mod health;
pub(crate) mod portfolios;
pub(crate) mod positions;

use axum::http::header::SET_COOKIE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::flash::Flash;

/// Every page hands the renderer its pending flash messages next to the
/// page data.
#[derive(Debug, Serialize)]
struct Page<T> {
    messages: Vec<String>,
    #[serde(flatten)]
    view: T,
}

/// Describes a form the renderer should draw: where it posts and which
/// fields it carries.
#[derive(Debug, Serialize)]
pub(crate) struct FormView {
    pub action: String,
    pub fields: &'static [&'static str],
}

pub(crate) const PORTFOLIO_FIELDS: &[&str] = &["nome"];
pub(crate) const POSITION_FIELDS: &[&str] = &["ticker", "quantidade", "preco_medio"];

pub(crate) fn render<T: Serialize>(flash: Flash, view: T) -> Response {
    let consumed = !flash.is_empty();
    let mut response = Json(Page {
        messages: flash.into_messages(),
        view,
    })
    .into_response();
    if consumed {
        response.headers_mut().append(SET_COOKIE, Flash::clear_cookie());
    }
    response
}

pub(crate) fn portfolio_url(id: i64) -> String {
    format!("/carteira/{}", id)
}
