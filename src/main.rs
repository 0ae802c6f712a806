mod bot;
mod config;
mod error;
mod model;
mod router;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    tracing::info!("Starting signing bot");

    let port = config.port;
    tokio::spawn(async move {
        if let Err(e) = startup::start_health_endpoint(port).await {
            tracing::error!("Health endpoint error: {:?}", e);
        }
    });

    bot::start::start_bot(&config).await
}
