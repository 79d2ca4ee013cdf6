mod portfolio;
mod position;

pub use portfolio::{Portfolio, PortfolioDetail, PortfolioForm, PortfolioSummary};
pub use position::{Position, PositionForm, PositionValues};

/// Outcome of a create form submission: either a stored record, or the
/// form is shown again because a required field was left blank.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Saved(T),
    Reprompt,
}
