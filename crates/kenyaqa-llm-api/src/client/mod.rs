use async_trait::async_trait;

use kenyaqa_types::ProviderError;

pub mod gemini;
pub mod http;
pub mod openai_compat;

pub use gemini::GeminiClient;
pub use http::HttpTransport;
pub use openai_compat::OpenAiCompatClient;

/// Answer provider trait - unified interface for all model backends
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Ask the model one question and return its plain-text answer
    async fn generate(&self, question: &str) -> Result<String, ProviderError>;

    /// Identifier of the model producing the answers
    fn model_id(&self) -> &str;
}
