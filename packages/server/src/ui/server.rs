//! Server execution logic.

use std::sync::Arc;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::usecase::{
    BuzzUseCase, ConnectUseCase, DisconnectUseCase, JoinGroupUseCase, LeaveGroupUseCase,
    RelayStatsUseCase, StatusUpdateUseCase, WakeUpUseCase,
};

use super::{
    handler::{health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Presence relay server
///
/// Encapsulates the wired use cases and the transport configuration.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state, "*".to_string());
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    state: AppState,
    /// CORS allow-list: a single origin, or `*` for any
    allowed_origin: String,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        connect_usecase: Arc<ConnectUseCase>,
        disconnect_usecase: Arc<DisconnectUseCase>,
        join_group_usecase: Arc<JoinGroupUseCase>,
        leave_group_usecase: Arc<LeaveGroupUseCase>,
        wake_up_usecase: Arc<WakeUpUseCase>,
        status_update_usecase: Arc<StatusUpdateUseCase>,
        buzz_usecase: Arc<BuzzUseCase>,
        relay_stats_usecase: Arc<RelayStatsUseCase>,
        allowed_origin: String,
    ) -> Self {
        Self {
            state: AppState {
                connect_usecase,
                disconnect_usecase,
                join_group_usecase,
                leave_group_usecase,
                wake_up_usecase,
                status_update_usecase,
                buzz_usecase,
                relay_stats_usecase,
            },
            allowed_origin,
        }
    }

    /// Run the presence relay server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified
    /// address, if the allowed origin is not a valid header value, or if
    /// there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let cors = if self.allowed_origin == "*" {
            CorsLayer::new().allow_origin(Any)
        } else {
            CorsLayer::new().allow_origin(self.allowed_origin.parse::<HeaderValue>()?)
        };

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::new(self.state));

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Presence relay server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws?user_id=<id>", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
