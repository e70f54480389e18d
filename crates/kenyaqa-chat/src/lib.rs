//! Question answering for kenyaqa
//!
//! This crate provides the bounded history log and the query service that
//! validates a question, asks the model provider, and records the result.

pub mod history;
pub mod service;

// Re-export commonly used types
pub use history::{HistoryPage, HistoryStore};
pub use service::{QueryService, SharedHistory};
