use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use kenyaqa_types::ConfigurationError;

use crate::app::AppConfig;
use crate::cli::Cli;
use crate::config::default_cors_origins;
use crate::web::server::{CorsPolicy, WebServer, WebServerConfig};

/// Run the web server
pub async fn run_web_server(cli: &Cli, app_config: AppConfig) -> Result<()> {
    let bind = format!("{}:{}", cli.bind, cli.port);
    let addr: SocketAddr = bind
        .parse()
        .map_err(|_| ConfigurationError::InvalidBindAddress(bind.clone()))?;

    let cors = if cli.cors_any {
        CorsPolicy::Any
    } else if cli.cors_origins.is_empty() {
        CorsPolicy::Origins(default_cors_origins())
    } else {
        CorsPolicy::Origins(cli.cors_origins.clone())
    };

    println!("🌐 Starting Kenyan Leaders Q&A server...");
    println!("   Address: {}", addr);

    let config = WebServerConfig {
        bind_addr: addr,
        cors,
    };

    let server = WebServer::new(config, Arc::new(app_config.query_service()));
    server.start().await?;

    Ok(())
}
