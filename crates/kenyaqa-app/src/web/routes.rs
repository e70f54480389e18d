use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

use kenyaqa_chat::QueryService;
use kenyaqa_types::{PageRequest, QueryRequest, QueryResult, ServiceError, ValidationError, API_VERSION};

use crate::web::protocol::{
    ErrorResponse, ExamplesResponse, HealthResponse, HistoryClearResponse, HistoryResponse,
    RootResponse,
};

/// Shown to clients whenever the provider fails; details stay in the logs
pub const UNAVAILABLE_MESSAGE: &str = "AI service temporarily unavailable. Please try again later.";

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(service: Arc<QueryService>) -> Self {
        Self {
            service,
            started_at: Instant::now(),
        }
    }
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // API routes
        .route("/api/query", post(ask_question))
        .route("/api/examples", get(get_examples))
        .route("/api/history", get(get_history).delete(clear_history))
        .fallback(not_found)
        .with_state(state)
}

/// GET / - Service banner
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Kenyan Leaders Q&A System API".to_string(),
        status: "running".to_string(),
        docs: "/docs".to_string(),
        example_endpoint: "/api/examples".to_string(),
    })
}

/// GET /health - Service status and configured model
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.service.model_id().to_string(),
        timestamp: Utc::now(),
        uptime_seconds: Some(state.started_at.elapsed().as_secs()),
        version: API_VERSION.to_string(),
    })
}

/// POST /api/query - Ask a question about Kenyan leaders
async fn ask_question(
    State(state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResult>, AppError> {
    let Json(request) =
        payload.map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;

    let result = state.service.ask(&request).await?;
    Ok(Json(result))
}

/// GET /api/examples - Example questions
async fn get_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse::builtin())
}

/// GET /api/history - Paginated query history
async fn get_history(
    State(state): State<AppState>,
    params: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<HistoryResponse>, AppError> {
    let Query(request) =
        params.map_err(|rejection| ValidationError::Malformed(rejection.body_text()))?;

    let (page, records) = state.service.history_page(request).await;

    Ok(Json(HistoryResponse {
        history: records.items,
        total: records.total,
        page: page.page,
        per_page: page.per_page,
    }))
}

/// DELETE /api/history - Clear query history
async fn clear_history(State(state): State<AppState>) -> Json<HistoryClearResponse> {
    let cleared_count = state.service.clear_history().await;

    Json(HistoryClearResponse {
        message: "Successfully cleared query history".to_string(),
        cleared_count,
        timestamp: Utc::now(),
    })
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Unavailable,
    NotFound,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(err) => AppError::Validation(err),
            // Provider detail was already logged by the service
            ServiceError::Unavailable(_) => AppError::Unavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, detail, code) = match self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid input",
                err.to_string(),
                "VALIDATION_ERROR",
            ),
            AppError::Unavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                UNAVAILABLE_MESSAGE.to_string(),
                "SERVICE_UNAVAILABLE",
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Not found",
                "No route matches this path".to_string(),
                "NOT_FOUND",
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            detail: Some(detail),
            timestamp: Utc::now(),
            error_code: Some(code.to_string()),
        });

        (status, body).into_response()
    }
}
