use anyhow::Result;

use kenyaqa_llm_api::{get_default_url_for_backend, BackendType, ProviderSettings};
use kenyaqa_logging::RequestLogger;
use kenyaqa_types::ConfigurationError;

use crate::cli::Cli;

pub mod helpers;

pub use helpers::{default_cors_origins, env_non_empty, origin_matches};

/// Provider configuration resolved from CLI flags and the environment
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendType,
    pub api_key: String,
    pub model: String,
    pub api_url: Option<String>,
    pub timeout_secs: u64,
    pub log_requests: bool,
}

impl ClientConfig {
    /// Resolve configuration from parsed CLI arguments and the process environment
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigurationError> {
        Self::resolve(cli, env_non_empty)
    }

    /// Resolve configuration using `lookup` for environment variables.
    ///
    /// Precedence: CLI flags > environment (including `.env`) > backend defaults.
    /// A missing API key is fatal for hosted backends.
    pub fn resolve(
        cli: &Cli,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let backend = BackendType::from_str(&cli.backend)
            .ok_or_else(|| ConfigurationError::UnknownBackend(cli.backend.clone()))?;

        let cli_key = helpers::non_empty(cli.api_key.clone());
        let api_key = match backend.api_key_env() {
            Some(var) => cli_key.or_else(|| lookup(var)).ok_or_else(|| {
                ConfigurationError::MissingApiKey {
                    var: var.to_string(),
                }
            })?,
            // llama.cpp servers usually run without a key
            None => cli_key.unwrap_or_default(),
        };

        let api_url = helpers::non_empty(cli.api_url.clone());
        if api_url.is_none() && get_default_url_for_backend(&backend).is_none() {
            return Err(ConfigurationError::MissingApiUrl {
                backend: backend.as_str().to_string(),
            });
        }

        let model = helpers::non_empty(cli.model.clone())
            .or_else(|| match backend {
                BackendType::Gemini => lookup("GEMINI_MODEL"),
                _ => None,
            })
            .unwrap_or_else(|| backend.default_model().to_string());

        Ok(Self {
            backend,
            api_key,
            model,
            api_url,
            timeout_secs: cli.timeout_secs.max(1),
            log_requests: cli.log_requests,
        })
    }

    /// Settings for the provider factory
    pub fn provider_settings(&self) -> Result<ProviderSettings> {
        let request_logger = if self.log_requests {
            Some(RequestLogger::in_default_dir()?)
        } else {
            None
        };

        Ok(ProviderSettings {
            backend: self.backend,
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            api_url: self.api_url.clone(),
            timeout_secs: self.timeout_secs,
            request_logger,
        })
    }
}
