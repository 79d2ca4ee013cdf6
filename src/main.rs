use tokio::net::TcpListener;

use carteiras::app::create_app;
use carteiras::config::AppConfig;
use carteiras::db;
use carteiras::logging::{init_logging, LoggingConfig};
use carteiras::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logging first, so startup failures below are recorded.
    init_logging(LoggingConfig::from_env())?;

    let config = AppConfig::from_env()?;
    let pool = db::init_pool(&config).await?;
    let app = create_app(AppState { pool });

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Carteiras running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
