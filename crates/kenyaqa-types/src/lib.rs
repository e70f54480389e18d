//! Core types and structures for kenyaqa
//!
//! This crate provides the foundational types used across all kenyaqa crates:
//! history records, the query request/result contract, pagination clamping
//! and the error taxonomy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::{ConfigurationError, ProviderError, ServiceError, ValidationError};

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of records kept in the history log
pub const HISTORY_CAPACITY: usize = 100;

/// Maximum question length, in characters
pub const MAX_QUESTION_CHARS: usize = 500;

/// Page size used when the caller asks for fewer than one item per page
pub const DEFAULT_PER_PAGE: usize = 10;

/// Upper bound on page size to keep history responses small
pub const MAX_PER_PAGE: usize = 50;

/// Model used when no override is configured
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Version reported by the health endpoint
pub const API_VERSION: &str = "1.0.0";

/// Upper bound on a single provider round trip
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// History Types
// ============================================================================

/// One stored question/answer exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
    pub ai_model_used: String,
    pub response_time_ms: Option<u64>,
}

impl HistoryRecord {
    /// Create a record with a fresh id, stamped with the current time
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        model_id: impl Into<String>,
        latency_ms: Option<u64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            answer: answer.into(),
            timestamp: Utc::now(),
            ai_model_used: model_id.into(),
            response_time_ms: latency_ms,
        }
    }
}

// ============================================================================
// Query Types
// ============================================================================

/// Incoming question about Kenyan political leaders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

impl QueryRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }

    /// Check the question shape. The question itself is passed on untouched.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_question(&self.question)
    }
}

/// Validate a question: non-blank after trimming, at most 500 characters
pub fn validate_question(question: &str) -> Result<(), ValidationError> {
    if question.trim().is_empty() {
        return Err(ValidationError::Blank);
    }

    let chars = question.chars().count();
    if chars > MAX_QUESTION_CHARS {
        return Err(ValidationError::TooLong {
            max: MAX_QUESTION_CHARS,
            actual: chars,
        });
    }

    Ok(())
}

/// Answer returned to the caller for one successful query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
    pub ai_model_used: String,
    pub response_time_ms: Option<u64>,
}

// ============================================================================
// Pagination
// ============================================================================

/// Raw pagination parameters as supplied by a client
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: Option<i64>,
    #[serde(default)]
    pub per_page: Option<i64>,
}

/// Pagination values after clamping, safe to hand to the history store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Apply the history pagination policy:
    /// page < 1 becomes 1, per_page < 1 becomes 10, per_page > 50 becomes 50.
    pub fn clamp(&self) -> Page {
        let page = match self.page {
            Some(p) if p >= 1 => usize::try_from(p).unwrap_or(usize::MAX),
            _ => 1,
        };

        let per_page = match self.per_page {
            None => DEFAULT_PER_PAGE,
            Some(n) if n < 1 => DEFAULT_PER_PAGE,
            Some(n) if n > MAX_PER_PAGE as i64 => MAX_PER_PAGE,
            Some(n) => n as usize,
        };

        Page { page, per_page }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_page_clamping() {
        assert_eq!(PageRequest::new(1, 0).clamp(), Page { page: 1, per_page: 10 });
        assert_eq!(PageRequest::new(1, 500).clamp(), Page { page: 1, per_page: 50 });
        assert_eq!(PageRequest::new(-3, 10).clamp(), Page { page: 1, per_page: 10 });
        assert_eq!(PageRequest::new(0, -7).clamp(), Page { page: 1, per_page: 10 });
        assert_eq!(PageRequest::new(4, 50).clamp(), Page { page: 4, per_page: 50 });
        assert_eq!(PageRequest::default().clamp(), Page { page: 1, per_page: 10 });
    }

    #[test]
    fn test_validate_blank_question() {
        assert_eq!(validate_question(""), Err(ValidationError::Blank));
        assert_eq!(validate_question("   \n\t "), Err(ValidationError::Blank));
    }

    #[test]
    fn test_validate_question_length() {
        let exact = "a".repeat(MAX_QUESTION_CHARS);
        assert!(validate_question(&exact).is_ok());

        let over = "a".repeat(MAX_QUESTION_CHARS + 1);
        assert_eq!(
            validate_question(&over),
            Err(ValidationError::TooLong { max: 500, actual: 501 })
        );
    }

    #[test]
    fn test_validate_counts_characters_not_bytes() {
        // 500 two-byte characters is still within the limit
        let question = "é".repeat(MAX_QUESTION_CHARS);
        assert!(question.len() > MAX_QUESTION_CHARS);
        assert!(QueryRequest::new(question).validate().is_ok());
    }

    #[test]
    fn test_history_record_ids_are_unique() {
        let a = HistoryRecord::new("q", "a", "model-x", Some(1));
        let b = HistoryRecord::new("q", "a", "model-x", Some(1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_history_record_wire_format() {
        let record = HistoryRecord::new("Who is governor of Meru?", "Kawira Mwangaza", "model-x", Some(1200));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["question"], "Who is governor of Meru?");
        assert_eq!(json["ai_model_used"], "model-x");
        assert_eq!(json["response_time_ms"], 1200);
        assert!(json["timestamp"].is_string());
    }
}
