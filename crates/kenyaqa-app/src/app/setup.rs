use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::Arc;

use kenyaqa_chat::{HistoryStore, QueryService};
use kenyaqa_llm_api::{AnswerProvider, ClientFactory};

use crate::cli::Cli;
use crate::config::ClientConfig;

/// Application configuration derived from CLI arguments and environment
pub struct AppConfig {
    pub client_config: ClientConfig,
    pub provider: Arc<dyn AnswerProvider>,
}

impl AppConfig {
    /// Fresh query service with an empty history log
    pub fn query_service(&self) -> QueryService {
        QueryService::new(self.provider.clone(), HistoryStore::new())
    }
}

/// Set up application configuration from CLI arguments.
///
/// Fails fast on configuration errors so the server never starts half-configured.
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    let client_config = ClientConfig::from_cli(cli).context("Invalid configuration")?;

    let settings = client_config.provider_settings()?;
    let provider = ClientFactory::create(settings)?;

    let mut banner = vec![format!(
        "{} {} via {}",
        "🤖 Model:".bright_cyan(),
        client_config.model.bright_white().bold(),
        client_config.backend.as_str()
    )];
    banner.push(
        format!("   Provider timeout: {}s", client_config.timeout_secs)
            .bright_black()
            .to_string(),
    );
    if let Some(url) = &client_config.api_url {
        banner.push(format!("   Provider URL: {}", url).bright_black().to_string());
    }
    if client_config.log_requests {
        banner.push(
            "📝 Provider requests will be logged to ~/.kenyaqa/logs"
                .bright_blue()
                .to_string(),
        );
    }
    print_banner(cli, &banner);

    Ok(AppConfig {
        client_config,
        provider,
    })
}

/// Status lines go to stderr in ask mode so stdout stays pure JSON
pub fn banner_to_stderr(cli: &Cli) -> bool {
    cli.ask.is_some()
}

fn print_banner(cli: &Cli, lines: &[String]) {
    for line in lines {
        if banner_to_stderr(cli) {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}
