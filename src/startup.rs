use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{error::AppError, router};

/// Installs the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG` and falls back to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Binds the health endpoint on all interfaces and serves it until the process exits.
///
/// # Arguments
/// - `port` - TCP port to listen on
///
/// # Returns
/// - `Ok(())` - The server shut down
/// - `Err(AppError::IoErr)` - Failed to bind the port or accept connections
pub async fn start_health_endpoint(port: u16) -> Result<(), AppError> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Health endpoint listening on port {}", port);

    serve_health(listener).await
}

pub async fn serve_health(listener: TcpListener) -> Result<(), AppError> {
    axum::serve(listener, router::router()).await?;

    Ok(())
}
