use anyhow::{Context, Result};
use std::sync::Arc;

use kenyaqa_logging::RequestLogger;

use crate::client::{AnswerProvider, GeminiClient, OpenAiCompatClient};
use crate::config::{get_default_url_for_backend, normalize_api_url, BackendType};

/// Everything needed to build an answer provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub backend: BackendType,
    pub api_key: String,
    pub model: String,
    /// Custom API URL (uses the backend default if None)
    pub api_url: Option<String>,
    pub timeout_secs: u64,
    /// Write each provider exchange to disk when set
    pub request_logger: Option<RequestLogger>,
}

/// Client factory for creating answer providers
pub struct ClientFactory;

impl ClientFactory {
    /// Create an answer provider for the configured backend
    ///
    /// # Returns
    /// Arc-wrapped provider implementing the AnswerProvider trait
    pub fn create(settings: ProviderSettings) -> Result<Arc<dyn AnswerProvider>> {
        let ProviderSettings {
            backend,
            api_key,
            model,
            api_url,
            timeout_secs,
            request_logger,
        } = settings;

        let url = api_url
            .or_else(|| get_default_url_for_backend(&backend))
            .with_context(|| format!("{} backend requires an API URL", backend.as_str()))?;

        let provider: Arc<dyn AnswerProvider> = match backend {
            BackendType::Gemini => Arc::new(
                GeminiClient::new(api_key, model, url, timeout_secs, request_logger)
                    .context("Failed to create Gemini client")?,
            ),
            BackendType::OpenAI | BackendType::Groq | BackendType::Llama => Arc::new(
                OpenAiCompatClient::new(
                    api_key,
                    model,
                    normalize_api_url(&url),
                    timeout_secs,
                    request_logger,
                )
                .context("Failed to create OpenAI-compatible client")?,
            ),
        };

        Ok(provider)
    }
}
