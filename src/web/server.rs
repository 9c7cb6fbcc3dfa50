//! Web server for the showcase backend.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;

use crate::config::{Config, WebConfig};
use crate::{Result, ShowcaseError};

use super::handlers::AppState;
use super::middleware::RateLimitState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Contact rate limiting state.
    rate_limit: Arc<RateLimitState>,
    /// Web configuration.
    web_config: WebConfig,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &Config) -> Result<Self> {
        let addr = format!("{}:{}", config.web.host, config.web.port)
            .parse()
            .map_err(|e| {
                ShowcaseError::Config(format!(
                    "invalid web server address {}:{}: {}",
                    config.web.host, config.web.port, e
                ))
            })?;

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::new(config)?),
            rate_limit: Arc::new(RateLimitState::new(config.web.contact_rate_limit)),
            web_config: config.web.clone(),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_router(&self) -> Router {
        create_router(
            self.app_state.clone(),
            self.rate_limit.clone(),
            &self.web_config.cors_origins,
        )
        .merge(create_health_router())
        .layer(CompressionLayer::new())
    }

    async fn bind(self) -> Result<(TcpListener, Router, SocketAddr)> {
        let router = self.build_router();
        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        self.rate_limit.clone().start_cleanup_task();
        tracing::info!(
            feed_url = %self.app_state.feed_fetcher.feed_url(),
            "Web server listening on http://{}",
            local_addr
        );

        Ok((listener, router, local_addr))
    }

    /// Run the web server until it fails.
    pub async fn run(self) -> Result<()> {
        let (listener, router, _) = self.bind().await?;

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> Result<SocketAddr> {
        let (listener, router, local_addr) = self.bind().await?;

        tokio::spawn(async move {
            if let Err(e) = axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}
