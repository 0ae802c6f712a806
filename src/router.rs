use axum::{http::StatusCode, Router};

/// Builds the health router.
///
/// Every method and path is answered with the same liveness text so hosting platforms can
/// probe the bot on whatever route they use.
pub fn router() -> Router {
    Router::new().fallback(health)
}

async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "Bot is running!")
}
