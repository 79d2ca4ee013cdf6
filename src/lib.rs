pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod flash;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
