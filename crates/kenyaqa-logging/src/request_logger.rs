use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::get_logs_dir;

/// Writes provider request/response pairs to disk for debugging
#[derive(Debug, Clone)]
pub struct RequestLogger {
    dir: PathBuf,
}

/// Handle tying a logged request to its response file
#[derive(Debug, Clone)]
pub struct ExchangeLog {
    pub stamp: String,
    pub request_path: PathBuf,
}

impl RequestLogger {
    /// Log into an explicit directory (created on first use)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Log into ~/.kenyaqa/logs
    pub fn in_default_dir() -> Result<Self> {
        Ok(Self::new(get_logs_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log an outgoing provider request. The API key is redacted.
    pub fn log_request(
        &self,
        url: &str,
        model: &str,
        api_key: &str,
        request: &serde_json::Value,
    ) -> Result<ExchangeLog> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create log directory {}", self.dir.display()))?;

        let now = Utc::now();
        let stamp = format!(
            "{}-{}",
            now.format("%Y%m%dT%H%M%S%.3f"),
            &Uuid::new_v4().simple().to_string()[..8]
        );
        let filename = format!("req-{}-{}.txt", stamp, sanitize(model));
        let file_path = self.dir.join(filename);

        let mut log_content = String::new();
        log_content.push_str("HTTP REQUEST LOG\n");
        log_content.push_str("================\n\n");
        log_content.push_str(&format!("Timestamp: {}\n", now.to_rfc3339()));
        log_content.push_str(&format!("Model: {}\n\n", model));

        // Parse URL to show host and port
        if let Ok(parsed_url) = reqwest::Url::parse(url) {
            log_content.push_str(&format!("URL: {}\n", parsed_url.path()));
            log_content.push_str(&format!("Host: {}\n", parsed_url.host_str().unwrap_or("unknown")));
            log_content.push_str(&format!("Scheme: {}\n\n", parsed_url.scheme()));
        } else {
            log_content.push_str(&format!("URL: {}\n\n", url));
        }

        log_content.push_str("Headers:\n");
        log_content.push_str("  Content-Type: application/json\n");
        log_content.push_str(&format!("  API Key: {}\n\n", redact_key(api_key)));

        log_content.push_str("Request Body:\n");
        match serde_json::to_string_pretty(request) {
            Ok(json) => {
                log_content.push_str(&json);
                log_content.push('\n');
            }
            Err(e) => {
                log_content.push_str(&format!("Error serializing request: {}\n", e));
            }
        }

        fs::write(&file_path, log_content)
            .with_context(|| format!("Failed to write request log to {}", file_path.display()))?;

        tracing::debug!(path = %file_path.display(), "provider request logged");

        Ok(ExchangeLog {
            stamp,
            request_path: file_path,
        })
    }

    /// Log the provider response belonging to `exchange`
    pub fn log_response(
        &self,
        exchange: &ExchangeLog,
        model: &str,
        status: u16,
        body: &str,
    ) -> Result<PathBuf> {
        let filename = format!("resp-{}-{}.txt", exchange.stamp, sanitize(model));
        let file_path = self.dir.join(filename);

        let mut log_content = String::new();
        log_content.push_str("HTTP RESPONSE LOG\n");
        log_content.push_str("=================\n\n");
        log_content.push_str(&format!("Timestamp: {}\n", Utc::now().to_rfc3339()));
        log_content.push_str(&format!("Model: {}\n", model));
        log_content.push_str(&format!("Status: {}\n\n", status));

        log_content.push_str("Response Body:\n");
        // Try to pretty-print JSON, fall back to raw text
        match serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
        {
            Some(pretty) => log_content.push_str(&pretty),
            None => log_content.push_str(body),
        }
        log_content.push('\n');

        log_content.push_str("\n---\n");
        log_content.push_str(&format!("Response Size: {} bytes\n", body.len()));

        fs::write(&file_path, log_content)
            .with_context(|| format!("Failed to write response log to {}", file_path.display()))?;

        tracing::debug!(path = %file_path.display(), "provider response logged");

        Ok(file_path)
    }
}

/// Keep the first few characters of a secret
pub fn redact_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return "(none)".to_string();
    }
    format!("{}***", api_key.chars().take(4).collect::<String>())
}

fn sanitize(model: &str) -> String {
    model.replace(['/', ':', '\\'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_and_response_are_paired() {
        let dir = tempfile::tempdir().unwrap();
        let logger = RequestLogger::new(dir.path().join("logs"));

        let exchange = logger
            .log_request(
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent",
                "gemini-2.0-flash",
                "AIzaSecretKey",
                &json!({ "contents": [] }),
            )
            .unwrap();
        let response_path = logger
            .log_response(&exchange, "gemini-2.0-flash", 200, r#"{"candidates":[]}"#)
            .unwrap();

        let request_log = fs::read_to_string(&exchange.request_path).unwrap();
        assert!(request_log.contains("Host: generativelanguage.googleapis.com"));
        assert!(request_log.contains("AIza***"));
        assert!(!request_log.contains("AIzaSecretKey"));

        let response_log = fs::read_to_string(&response_path).unwrap();
        assert!(response_log.contains("Status: 200"));
        assert!(response_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .contains(&exchange.stamp));
    }

    #[test]
    fn test_redact_key() {
        assert_eq!(redact_key(""), "(none)");
        assert_eq!(redact_key("abcdefgh"), "abcd***");
    }
}
