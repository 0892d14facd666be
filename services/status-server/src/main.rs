use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;

use status_server::telemetry;
use status_server::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    telemetry::init_tracing("info")?;

    let config = Config::from_env()?;
    let addr = config.listen_addr();
    info!("Starting Status Server on {} (payload variant: {})", addr, config.variant);

    let app = create_app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Status Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .context("HTTP server stopped")?;

    Ok(())
}
