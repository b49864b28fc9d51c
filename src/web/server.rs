//! Web server for doorkeep.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ServerConfig;

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// HTTP server wrapping the application router.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    state: AppState,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .expect("Invalid web server address");

        Self { addr, state }
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let router = create_router(self.state).merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }
}
