//! Kenyan Leaders Q&A Application Library
//!
//! HTTP API, configuration and startup for the kenyaqa service.

// Re-export workspace crates
pub use kenyaqa_types::{self as types, QueryRequest, QueryResult, HistoryRecord};
pub use kenyaqa_llm_api::{self as llm_api, AnswerProvider, BackendType};
pub use kenyaqa_chat::{self as chat, HistoryStore, QueryService};

// Local modules
pub mod cli;
pub mod config;
pub mod app;
pub mod web;

// Re-exports from local modules
pub use cli::Cli;
pub use config::ClientConfig;
pub use app::{setup_from_cli, run_ask_mode, run_web_server, AppConfig};
