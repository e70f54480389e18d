use thiserror::Error;

/// Rejected question shape. Messages are safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Question cannot be empty")]
    Blank,
    #[error("Question must be between 1 and {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
    #[error("Invalid request: {0}")]
    Malformed(String),
}

/// Failure talking to the model provider. Logged, never shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Http(String),
    #[error("provider did not respond within {secs}s")]
    Timeout { secs: u64 },
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode provider response: {0}")]
    Decode(String),
    #[error("provider returned no usable content")]
    EmptyResponse,
    #[error("provider blocked the prompt: {0}")]
    Blocked(String),
}

/// Startup configuration problems. Fatal: the server does not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{var} environment variable is required")]
    MissingApiKey { var: String },
    #[error("unknown backend '{0}' (expected gemini, openai, groq or llama)")]
    UnknownBackend(String),
    #[error("{backend} backend requires --api-url")]
    MissingApiUrl { backend: String },
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),
}

/// Outcome of a failed query, as seen by the API layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("AI service temporarily unavailable")]
    Unavailable(#[source] ProviderError),
}

impl From<ProviderError> for ServiceError {
    fn from(err: ProviderError) -> Self {
        ServiceError::Unavailable(err)
    }
}
