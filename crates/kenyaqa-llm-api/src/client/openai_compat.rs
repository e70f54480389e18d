use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use kenyaqa_logging::RequestLogger;
use kenyaqa_models::{ChatRequest, ChatResponse, Message};
use kenyaqa_types::ProviderError;

use crate::client::{AnswerProvider, HttpTransport};
use crate::prompt::build_prompt;

/// OpenAI-compatible chat completions client (OpenAI, Groq, llama.cpp server)
pub struct OpenAiCompatClient {
    api_key: String,
    model: String,
    api_url: String,
    transport: HttpTransport,
}

impl OpenAiCompatClient {
    pub fn new(
        api_key: String,
        model: String,
        api_url: String,
        timeout_secs: u64,
        request_logger: Option<RequestLogger>,
    ) -> Result<Self> {
        Ok(Self {
            api_key,
            model,
            api_url,
            transport: HttpTransport::new(timeout_secs, request_logger)?,
        })
    }

    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // llama.cpp servers usually run without a key
        if !self.api_key.is_empty() {
            let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| ProviderError::Http("API key is not a valid header value".to_string()))?;
            headers.insert(AUTHORIZATION, bearer);
        }
        Ok(headers)
    }
}

#[async_trait]
impl AnswerProvider for OpenAiCompatClient {
    async fn generate(&self, question: &str) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::user(build_prompt(question))],
            temperature: None,
        };
        let body = serde_json::to_value(&request)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let text = self
            .transport
            .post_json(&self.api_url, self.headers()?, &body, &self.model, &self.api_key)
            .await?;

        let chat_response: ChatResponse = serde_json::from_str(&text)
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        chat_response.text().ok_or(ProviderError::EmptyResponse)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
