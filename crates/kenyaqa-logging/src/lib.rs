// Logging module - tracing setup and provider request logging
pub mod request_logger;

use std::path::PathBuf;
use anyhow::{Result, Context};
use tracing_subscriber::EnvFilter;

pub use request_logger::{RequestLogger, ExchangeLog};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` for our own crates
/// when `verbose` is on. Safe to call more than once (later calls are no-ops).
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "info,kenyaqa=debug,kenyaqa_chat=debug,kenyaqa_llm_api=debug,tower_http=debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = if max_chars >= 3 { max_chars - 3 } else { 0 };
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

/// Get or create the base kenyaqa directory (~/.kenyaqa)
pub fn get_kenyaqa_dir() -> Result<PathBuf> {
    let home_dir = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Failed to get home directory")?;

    let kenyaqa_dir = PathBuf::from(home_dir).join(".kenyaqa");

    if !kenyaqa_dir.exists() {
        std::fs::create_dir_all(&kenyaqa_dir)
            .context("Failed to create kenyaqa directory")?;
    }

    Ok(kenyaqa_dir)
}

/// Get or create the logs directory (~/.kenyaqa/logs)
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = get_kenyaqa_dir()?.join("logs");

    if !logs_dir.exists() {
        std::fs::create_dir_all(&logs_dir)
            .context("Failed to create logs directory")?;
    }

    Ok(logs_dir)
}
