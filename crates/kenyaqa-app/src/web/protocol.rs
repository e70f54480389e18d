use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kenyaqa_types::HistoryRecord;

/// Questions offered to users who don't know what to ask
pub const EXAMPLE_QUERIES: &[&str] = &[
    "Who is the governor of Meru County?",
    "List all senators from Central Kenya",
    "Who is the current Deputy President of Kenya?",
    "What are the 47 counties in Kenya?",
    "Who is the speaker of the National Assembly?",
    "List MCAs of Kiambu County",
    "Who is the Cabinet Secretary for Interior?",
    "What is the role of a county commissioner?",
];

pub const USAGE_TIP: &str = "Ask specific questions about Kenyan political leaders and government positions. \
Be specific about counties, positions, or regions for better results.";

/// GET / response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub docs: String,
    pub example_endpoint: String,
}

/// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub timestamp: DateTime<Utc>,
    pub uptime_seconds: Option<u64>,
    pub version: String,
}

/// GET /api/examples response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamplesResponse {
    pub examples: Vec<String>,
    pub total: usize,
    pub usage_tip: String,
}

impl ExamplesResponse {
    pub fn builtin() -> Self {
        Self {
            examples: EXAMPLE_QUERIES.iter().map(|q| q.to_string()).collect(),
            total: EXAMPLE_QUERIES.len(),
            usage_tip: USAGE_TIP.to_string(),
        }
    }
}

/// GET /api/history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryRecord>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
}

/// DELETE /api/history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryClearResponse {
    pub message: String,
    pub cleared_count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub error_code: Option<String>,
}
