//! Credscope Web Server
//!
//! Run with: cargo run -p credscope-web

use credscope_common::ServerConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Credscope Web Server...");

    let config = ServerConfig::load()?;
    let addr = config.bind_addr()?;

    // Create app state
    let state = credscope_web::state::AppState::new(config)?;

    // Build router
    let app = credscope_web::router::build_router(state);

    info!("🚀 Server listening on http://{}", addr);
    info!("📱 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
