use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use kenyaqa_logging::RequestLogger;
use kenyaqa_models::{GenerateContentRequest, GenerateContentResponse};
use kenyaqa_types::ProviderError;

use crate::client::{AnswerProvider, HttpTransport};
use crate::prompt::build_prompt;

/// Google Gemini client using the `generateContent` REST endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    transport: HttpTransport,
}

impl GeminiClient {
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout_secs: u64,
        request_logger: Option<RequestLogger>,
    ) -> Result<Self> {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            api_key,
            model,
            base_url,
            transport: HttpTransport::new(timeout_secs, request_logger)?,
        })
    }

    pub fn generate_content_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(&self.api_key)
            .map_err(|_| ProviderError::Http("API key is not a valid header value".to_string()))?;
        headers.insert("x-goog-api-key", key);
        Ok(headers)
    }
}

#[async_trait]
impl AnswerProvider for GeminiClient {
    async fn generate(&self, question: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest::from_prompt(build_prompt(question));
        let body = serde_json::to_value(&request)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let text = self
            .transport
            .post_json(
                &self.generate_content_url(),
                self.headers()?,
                &body,
                &self.model,
                &self.api_key,
            )
            .await?;

        let response: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if let Some(answer) = response.text() {
            return Ok(answer);
        }

        match response.block_reason() {
            Some(reason) => Err(ProviderError::Blocked(reason.to_string())),
            None => Err(ProviderError::EmptyResponse),
        }
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
