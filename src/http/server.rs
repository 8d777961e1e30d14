//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the auth handler on the configured path
//! - Wire up middleware (request ID, tracing)
//! - Bind the listener and serve until a shutdown signal
//! - Hand each request to the decision gate

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::auth::{Authenticator, Gate};
use crate::config::{ConfigSource, ServerConfig};
use crate::http::request::AuthRequest;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub gate: Arc<Gate>,
}

/// HTTP server for the auth gate.
pub struct AuthServer {
    router: Router,
    config: ServerConfig,
}

impl AuthServer {
    /// Create a new server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let gate = Gate::new(
            ConfigSource::new(config.config_location.clone()),
            Authenticator::new(config.auth_delay),
        )
        .allow_empty_secret(config.allow_empty_secret);

        let state = AppState {
            gate: Arc::new(gate),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        Router::new()
            .route(&config.endpoint, any(auth_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// The router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Bind the configured listening address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = self.config.bind_address();
        TcpListener::bind(address)
            .await
            .map_err(|source| ServerError::Bind { address, source })
    }

    /// Run the server until Ctrl+C or SIGTERM.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            endpoint = %self.config.endpoint,
            "Launching auth service"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Forward-auth handler, mounted for every method.
async fn auth_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, _body) = request.into_parts();
    let request = AuthRequest::from_parts(&parts);

    tracing::debug!(
        method = %parts.method,
        config = %state.gate.source().path().display(),
        "Handling auth request"
    );

    state.gate.decide(&request).await.into_response()
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
