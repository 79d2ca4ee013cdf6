use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Position;

// A named collection of stock positions (a "carteira").
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Portfolio {
    pub id: i64,
    pub name: String,
}

/// Row shown on the portfolio list.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PortfolioSummary {
    pub id: i64,
    pub name: String,
    pub position_count: i64,
}

/// A portfolio together with every position it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioDetail {
    pub id: i64,
    pub name: String,
    pub positions: Vec<Position>,
}

impl PortfolioDetail {
    pub fn new(portfolio: Portfolio, positions: Vec<Position>) -> Self {
        Self {
            id: portfolio.id,
            name: portfolio.name,
            positions,
        }
    }
}

// Submitted create-portfolio form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioForm {
    #[serde(rename = "nome")]
    pub name: String,
}
