use anyhow::Result;
use greeter_api::{app, logging, ApiConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ApiConfig::from_env()?;
    logging::init(config.log_format);

    let bind_addr = config.bind_addr;
    let log_format = config.log_format.as_str();
    let router = app(AppState::solana(config));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(%bind_addr, log_format, "greeter-api listening");

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;
    info!("greeter-api stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
