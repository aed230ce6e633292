//! Graceful shutdown signal handling.

/// Completes when Ctrl+C is received.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
