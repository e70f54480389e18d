#![allow(dead_code)]

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const TEST_CHAT_MODEL: &str = "llama-3.1-70b";

/// Mock server utilities for testing answer providers
pub struct ProviderMockServer {
    server: MockServer,
}

impl ProviderMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    fn gemini_path() -> String {
        format!("/v1beta/models/{}:generateContent", TEST_GEMINI_MODEL)
    }

    /// Mock successful Gemini response
    pub async fn mock_gemini_success(&self, response_content: &str) {
        Mock::given(method("POST"))
            .and(path(Self::gemini_path()))
            .and(header("x-goog-api-key", TEST_API_KEY))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": response_content }]
                    },
                    "finishReason": "STOP",
                    "index": 0
                }],
                "usageMetadata": {
                    "promptTokenCount": 60,
                    "candidatesTokenCount": 20,
                    "totalTokenCount": 80
                },
                "modelVersion": TEST_GEMINI_MODEL
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock Gemini response with no candidates and a block reason
    pub async fn mock_gemini_blocked(&self, reason: &str) {
        Mock::given(method("POST"))
            .and(path(Self::gemini_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": reason }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock Gemini response with an empty candidate list
    pub async fn mock_gemini_empty(&self) {
        Mock::given(method("POST"))
            .and(path(Self::gemini_path()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&self.server)
            .await;
    }

    /// Mock successful OpenAI-compatible chat completion
    pub async fn mock_chat_success(&self, response_content: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
            .and(body_partial_json(json!({ "model": TEST_CHAT_MODEL })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl_test123",
                "object": "chat.completion",
                "created": 1700000000,
                "model": TEST_CHAT_MODEL,
                "choices": [{
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": response_content
                    },
                    "finish_reason": "stop"
                }],
                "usage": {
                    "prompt_tokens": 10,
                    "completion_tokens": 20,
                    "total_tokens": 30
                }
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock chat completion whose message has null content
    pub async fn mock_chat_null_content(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "index": 0, "message": { "role": "assistant", "content": null } }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock server error
    pub async fn mock_server_error(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": { "code": 500, "message": "Internal error encountered." }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a response that arrives after `delay`
    pub async fn mock_slow(&self, delay: Duration) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "candidates": [] }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 response that is not JSON
    pub async fn mock_garbage(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&self.server)
            .await;
    }
}
