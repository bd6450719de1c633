//! Router and server setup.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{guess, index, AppState};
use crate::error::GameError;

/// Create the router with a fresh session store.
pub fn create_router() -> Router {
    create_router_with_state(AppState::new())
}

/// Create the router with custom state.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(guess))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Drain in-flight requests on Ctrl-C / SIGTERM.
    pub graceful_shutdown: bool,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            graceful_shutdown: true,
        }
    }

    pub fn without_graceful_shutdown(mut self) -> Self {
        self.graceful_shutdown = false;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 3000)
    }
}

/// Start the server with a fresh session store.
pub async fn serve(config: ServerConfig) -> crate::Result<()> {
    serve_with_state(config, AppState::new()).await
}

/// Start the server with custom state.
pub async fn serve_with_state(config: ServerConfig, state: AppState) -> crate::Result<()> {
    let addr = config.bind_address();
    let router = create_router_with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(GameError::Io)?;

    tracing::info!("Server running at http://{}", addr);

    let server = axum::serve(listener, router);
    if config.graceful_shutdown {
        server.with_graceful_shutdown(shutdown_signal()).await?;
    } else {
        server.await?;
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.graceful_shutdown);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_server_config_custom() {
        let config = ServerConfig::new("0.0.0.0", 8080).without_graceful_shutdown();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(!config.graceful_shutdown);
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let config = ServerConfig::new("256.0.0.1", 3000);
        let result = serve(config).await;
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
