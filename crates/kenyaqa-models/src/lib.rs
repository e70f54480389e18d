// Models module - wire formats for model provider APIs
pub mod gemini;
pub mod openai;


// Re-export commonly used types
pub use gemini::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback, UsageMetadata,
};
pub use openai::{ChatRequest, ChatResponse, Choice, Message, Usage};
