use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use kenyaqa_llm_api::AnswerProvider;
use kenyaqa_logging::safe_truncate;
use kenyaqa_types::{Page, PageRequest, QueryRequest, QueryResult, ServiceError};

use crate::history::{HistoryPage, HistoryStore};

/// History store shared between the service and the HTTP handlers
pub type SharedHistory = Arc<Mutex<HistoryStore>>;

/// Runs one question through validation, the provider, and the history log.
///
/// The history lock is only taken after the provider returns, so concurrent
/// questions never wait on each other's model calls. Records therefore land in
/// completion order.
pub struct QueryService {
    provider: Arc<dyn AnswerProvider>,
    history: SharedHistory,
}

impl QueryService {
    pub fn new(provider: Arc<dyn AnswerProvider>, history: HistoryStore) -> Self {
        Self::with_shared_history(provider, Arc::new(Mutex::new(history)))
    }

    pub fn with_shared_history(provider: Arc<dyn AnswerProvider>, history: SharedHistory) -> Self {
        Self { provider, history }
    }

    /// Identifier recorded as `ai_model_used`
    pub fn model_id(&self) -> &str {
        self.provider.model_id()
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Answer one question. History is written only when the provider succeeds.
    pub async fn ask(&self, request: &QueryRequest) -> Result<QueryResult, ServiceError> {
        request.validate()?;

        let question = request.question.as_str();
        tracing::info!("Processing query: {}", safe_truncate(question, 50));

        let started = Instant::now();
        let answer = match self.provider.generate(question).await {
            Ok(answer) => answer,
            Err(err) => {
                tracing::error!(
                    model = self.model_id(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Error processing query: {}",
                    err
                );
                return Err(ServiceError::Unavailable(err));
            }
        };
        let latency_ms = started.elapsed().as_millis() as u64;

        let result = QueryResult {
            question: request.question.clone(),
            answer,
            timestamp: Utc::now(),
            ai_model_used: self.model_id().to_string(),
            response_time_ms: Some(latency_ms),
        };

        let id = self.history.lock().await.append(
            &result.question,
            &result.answer,
            &result.ai_model_used,
            result.response_time_ms,
        );

        tracing::info!(id = %id, "Query processed successfully in {}ms", latency_ms);
        Ok(result)
    }

    /// Read a page of history after applying the pagination policy.
    /// Returns the clamped page actually served alongside the records.
    pub async fn history_page(&self, request: PageRequest) -> (Page, HistoryPage) {
        let page = request.clamp();
        let records = self.history.lock().await.page(page.page, page.per_page);
        (page, records)
    }

    /// Drop all history, returning how many records were removed
    pub async fn clear_history(&self) -> usize {
        let cleared = self.history.lock().await.clear();
        tracing::info!("Cleared {} items from query history", cleared);
        cleared
    }
}
