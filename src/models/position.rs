use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A single stock holding (an "ação") owned by exactly one portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Position {
    pub id: i64,
    pub portfolio_id: i64,
    pub ticker: String,
    pub quantity: i64,
    pub avg_price: f64,
}

/// Raw text of the create/edit position forms, exactly as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionForm {
    pub ticker: String,
    #[serde(rename = "quantidade")]
    pub quantity: String,
    #[serde(rename = "preco_medio")]
    pub avg_price: String,
}

/// Normalized values ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValues {
    pub ticker: String,
    pub quantity: i64,
    pub avg_price: f64,
}
