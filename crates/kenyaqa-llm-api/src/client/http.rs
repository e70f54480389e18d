use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use std::time::Duration;

use kenyaqa_logging::{safe_truncate, RequestLogger};
use kenyaqa_types::ProviderError;

/// Longest provider error body kept in a `ProviderError::Status`
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Shared HTTP plumbing for provider clients: timeout, status mapping and
/// optional on-disk exchange logging.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout_secs: u64,
    request_logger: Option<RequestLogger>,
}

impl HttpTransport {
    pub fn new(timeout_secs: u64, request_logger: Option<RequestLogger>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            timeout_secs,
            request_logger,
        })
    }

    /// POST a JSON body and return the raw response text of a 2xx reply
    pub async fn post_json(
        &self,
        url: &str,
        headers: HeaderMap,
        body: &serde_json::Value,
        model: &str,
        api_key: &str,
    ) -> Result<String, ProviderError> {
        let exchange = self.request_logger.as_ref().and_then(|logger| {
            logger
                .log_request(url, model, api_key, body)
                .map_err(|e| tracing::warn!("Failed to log provider request: {:#}", e))
                .ok()
        });

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if let (Some(logger), Some(exchange)) = (&self.request_logger, &exchange) {
            if let Err(e) = logger.log_response(exchange, model, status.as_u16(), &text) {
                tracing::warn!("Failed to log provider response: {:#}", e);
            }
        }

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: safe_truncate(&text, MAX_ERROR_BODY_CHARS),
            });
        }

        Ok(text)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            // Error text must never carry the request URL
            ProviderError::Http(err.without_url().to_string())
        }
    }
}
