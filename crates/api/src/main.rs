use anyhow::Context;

use stockledger_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        default_location = %config.store.default_location,
        low_stock_threshold = config.store.low_stock_threshold,
        on_duplicate = ?config.store.on_duplicate,
        "configuration loaded"
    );

    let app = stockledger_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
