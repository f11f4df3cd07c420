use anyhow::Result;
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::info;

/// Static liveness probe for the hosting platform's health checks.
pub async fn serve(port: u16) -> Result<()> {
    let app = router();

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {port}");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> &'static str {
    "🌱 Bot is alive!"
}
