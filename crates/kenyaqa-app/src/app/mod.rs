pub mod setup;
pub mod ask;
pub mod web_server;

pub use setup::{setup_from_cli, AppConfig};
pub use ask::run_ask_mode;
pub use web_server::run_web_server;
