//! HTTP server startup

use std::future::Future;
use std::net::SocketAddr;

use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::core::{Config, Result, ServerState};

/// Request access log
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// The full application with state and middleware applied
    pub fn router(&self) -> Router {
        crate::api::build_app()
            .with_state(self.state.clone())
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(log_request))
    }

    /// Serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Content server listening on {}", listener.local_addr()?);

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };
        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Bind `127.0.0.1:<http_port>` and serve in a background task.
    /// Returns the bound address; with port 0 the OS picks one.
    pub async fn spawn(self) -> Result<SocketAddr> {
        let listener =
            TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], self.config.http_port))).await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = self.serve(listener, std::future::pending()).await {
                tracing::error!("Server error: {}", e);
            }
        });
        tracing::debug!(%addr, "Content server spawned");
        Ok(addr)
    }
}
