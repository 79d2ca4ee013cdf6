pub mod parsing;
pub mod portfolio_service;
pub mod position_service;
