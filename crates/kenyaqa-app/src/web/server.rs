use anyhow::{Context, Result};
use axum::http::{request::Parts, HeaderValue};
use axum::Router;
use colored::Colorize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use kenyaqa_chat::QueryService;

use crate::config::origin_matches;
use crate::web::routes::{self, AppState};

/// Which browser origins may call the API
#[derive(Debug, Clone)]
pub enum CorsPolicy {
    Any,
    Origins(Vec<String>),
}

impl CorsPolicy {
    /// Build the tower-http CORS layer for this policy
    pub fn layer(&self) -> CorsLayer {
        match self {
            CorsPolicy::Any => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
            CorsPolicy::Origins(patterns) => {
                let patterns = patterns.clone();
                // Credentials forbid `*`, so methods and headers are mirrored instead
                CorsLayer::new()
                    .allow_origin(AllowOrigin::predicate(
                        move |origin: &HeaderValue, _parts: &Parts| {
                            origin
                                .to_str()
                                .map(|origin| patterns.iter().any(|p| origin_matches(p, origin)))
                                .unwrap_or(false)
                        },
                    ))
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true)
            }
        }
    }
}

/// Web server configuration
pub struct WebServerConfig {
    pub bind_addr: SocketAddr,
    pub cors: CorsPolicy,
}

/// Web server instance
pub struct WebServer {
    config: WebServerConfig,
    service: Arc<QueryService>,
}

impl WebServer {
    /// Create a new web server
    pub fn new(config: WebServerConfig, service: Arc<QueryService>) -> Self {
        Self { config, service }
    }

    /// Router with CORS and request tracing applied
    pub fn app(&self) -> Router {
        routes::create_router(AppState::new(self.service.clone()))
            .layer(self.config.cors.layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Start the web server; returns after Ctrl-C
    pub async fn start(self) -> Result<()> {
        let app = self.app();

        println!("🌐 Web server starting on http://{}", self.config.bind_addr);
        println!("   API endpoints: http://{}/api/query", self.config.bind_addr);
        println!("   Health check:  http://{}/health", self.config.bind_addr);
        match &self.config.cors {
            CorsPolicy::Any => println!("   {}", "CORS: any origin".yellow()),
            CorsPolicy::Origins(origins) => println!("   CORS: {}", origins.join(", ")),
        }

        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.bind_addr))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Web server failed")?;

        tracing::info!("Web server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
