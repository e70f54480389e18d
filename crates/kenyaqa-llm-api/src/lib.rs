//! # kenyaqa-llm-api
//!
//! Answer providers for the Kenyan leaders Q&A service.
//!
//! - Google Gemini (`generateContent`)
//! - OpenAI-compatible chat completions (OpenAI, Groq, llama.cpp)
//!
//! Every provider implements [`AnswerProvider`]: one question in, one plain
//! text answer or a typed [`ProviderError`] out. There is no retry, caching
//! or streaming; each call is a single round trip bounded by the configured
//! timeout.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kenyaqa_llm_api::{AnswerProvider, BackendType, ClientFactory, ProviderSettings};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = ClientFactory::create(ProviderSettings {
//!         backend: BackendType::Gemini,
//!         api_key: "your-api-key".to_string(),
//!         model: "gemini-2.0-flash".to_string(),
//!         api_url: None,
//!         timeout_secs: 30,
//!         request_logger: None,
//!     })?;
//!
//!     let answer = provider.generate("Who is the governor of Meru County?").await?;
//!     println!("{}", answer);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod prompt;

#[cfg(test)]
mod tests;

pub use kenyaqa_types::ProviderError;

// Re-export commonly used types
pub use client::{AnswerProvider, GeminiClient, OpenAiCompatClient};
pub use config::{
    BackendType,
    ClientFactory,
    ProviderSettings,
    GEMINI_API_URL,
    OPENAI_API_URL,
    GROQ_API_URL,
    normalize_api_url,
    get_default_url_for_backend,
};
pub use prompt::build_prompt;
