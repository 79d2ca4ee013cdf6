use crate::errors::AppError;
use crate::models::{PositionForm, PositionValues};

pub fn parse_quantity(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid quantity: '{}'", raw)))
}

/// Prices are typed with a comma as decimal separator ("68,50").
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    let normalized = raw.replace(',', ".");
    match normalized.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(AppError::Validation(format!("Invalid price: '{}'", raw))),
    }
}

impl PositionForm {
    pub fn has_blank_field(&self) -> bool {
        self.ticker.is_empty() || self.quantity.is_empty() || self.avg_price.is_empty()
    }

    pub fn parse(&self) -> Result<PositionValues, AppError> {
        Ok(PositionValues {
            ticker: self.ticker.to_uppercase(),
            quantity: parse_quantity(&self.quantity)?,
            avg_price: parse_price(&self.avg_price)?,
        })
    }
}
