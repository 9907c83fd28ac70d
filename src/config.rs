use anyhow::Result;
use sea_orm::{ConnectOptions, Database};
use std::time::Duration;
use tracing::{debug, info};
use crate::schemas::AppState;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://hotelrust.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Connect to `database_url` and build the application state around the pool.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let mut options = ConnectOptions::new(database_url);
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    debug!("Database connection established");

    Ok(AppState::new(db))
}
