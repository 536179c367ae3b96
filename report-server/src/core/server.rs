//! Server Implementation
//!
//! HTTP server startup and graceful shutdown

use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::core::{Config, ServerState};
use crate::routes::build_app;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let state = ServerState::initialize(&config);
        Self { config, state }
    }

    /// Create server with existing state (shared with in-process callers)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until Ctrl-C or SIGTERM
    ///
    /// In-flight requests get `shutdown_timeout_ms` to finish once the
    /// signal arrives.
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(%addr, environment = %self.config.environment, "Report server listening");

        let app = build_app().with_state(self.state.clone());
        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);

        let serve = std::future::IntoFuture::into_future(
            axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()),
        );
        let deadline = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        };

        tokio::select! {
            result = serve => result.map_err(ServerError::Serve)?,
            _ = deadline => {
                tracing::warn!(
                    grace_ms = self.config.shutdown_timeout_ms,
                    "Shutdown grace period elapsed, dropping open connections"
                );
            }
        }

        tracing::info!("Report server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutting down...");
}
