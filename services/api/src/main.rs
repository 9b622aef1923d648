use anyhow::Context;
use interviewer_api::{AppState, Config, create_router};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --- 1. Initialize Logging ---
    // Logging comes first so a configuration failure can still be reported.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    // --- 2. Load Configuration ---
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let bind_address = config.bind_address;

    // --- 3. Build the Router ---
    let app = create_router(AppState::from_config(config));

    // --- 4. Serve ---
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    tracing::info!("🚀 Server running on {}", bind_address);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
