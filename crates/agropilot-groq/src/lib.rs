// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Groq provider for the Agropilot chat handler.
//!
//! Implements [`CompletionProvider`] against Groq's OpenAI-compatible
//! chat-completions API: single-shot, non-streaming, fixed timeout,
//! no retry.

pub mod client;
pub mod types;

use agropilot_config::AgropilotConfig;
use agropilot_core::{AgropilotError, CompletionProvider};
use async_trait::async_trait;
use tracing::info;

use crate::client::GroqClient;

/// Groq chat-completions provider.
///
/// API key resolution order: config -> `GROQ_API_KEY` env var -> error.
pub struct GroqProvider {
    client: GroqClient,
}

impl GroqProvider {
    /// Creates a new Groq provider from the given configuration.
    pub fn from_config(config: &AgropilotConfig) -> Result<Self, AgropilotError> {
        let api_key = resolve_api_key(config.groq.api_key.as_deref())?;
        let client = GroqClient::new(
            &api_key,
            config.groq.model.clone(),
            config.groq.temperature,
        )?;

        info!(model = %config.groq.model, "Groq provider initialized");

        Ok(Self { client })
    }

    #[cfg(test)]
    fn with_client(client: GroqClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AgropilotError> {
        self.client.complete_chat(prompt).await
    }
}

/// Resolve the API key from config or the `GROQ_API_KEY` environment variable.
fn resolve_api_key(configured: Option<&str>) -> Result<String, AgropilotError> {
    if let Some(key) = configured {
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    match std::env::var("GROQ_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(AgropilotError::Config(
            "Groq API key required: set groq.api_key or the GROQ_API_KEY environment variable"
                .to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_against(server: &MockServer) -> GroqProvider {
        let client = GroqClient::new("gsk-test", "llama-3.1-8b-instant".into(), 0.3)
            .unwrap()
            .with_base_url(server.uri());
        GroqProvider::with_client(client)
    }

    #[tokio::test]
    async fn completion_returns_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("authorization", "Bearer gsk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "temperature": 0.3
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "Plant in spring." } }
                ]
            })))
            .mount(&server)
            .await;

        let response = provider_against(&server)
            .complete("When should I plant?")
            .await
            .unwrap();
        assert_eq!(response, "Plant in spring.");
    }

    #[tokio::test]
    async fn api_error_body_is_surfaced_in_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "message": "Invalid API Key", "type": "invalid_request_error" }
            })))
            .mount(&server)
            .await;

        let err = provider_against(&server)
            .complete("hello")
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid API Key"));
        assert!(message.contains("invalid_request_error"));
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let err = provider_against(&server)
            .complete("hello")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn missing_key_everywhere_is_a_config_error() {
        // Only deterministic when the ambient env var is unset.
        if std::env::var("GROQ_API_KEY").is_err() {
            let err = resolve_api_key(None).unwrap_err();
            assert!(matches!(err, AgropilotError::Config(_)));
        }
    }

    #[test]
    fn configured_key_wins_over_env() {
        let key = resolve_api_key(Some("gsk-configured")).unwrap();
        assert_eq!(key, "gsk-configured");
    }
}
