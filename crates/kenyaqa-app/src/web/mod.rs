// Web API module
pub mod protocol;
pub mod routes;
pub mod server;

pub use protocol::{ErrorResponse, ExamplesResponse, HealthResponse, HistoryClearResponse, HistoryResponse};
pub use routes::{create_router, AppState};
pub use server::{CorsPolicy, WebServer, WebServerConfig};
