// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Groq chat-completions API.
//!
//! Single-shot requests with a fixed timeout and no retry: the first
//! failure is final for a given user request, and the chat handler
//! degrades it to an apology string.

use std::time::Duration;

use agropilot_core::AgropilotError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatMessage, ChatRequest, ChatResponse};

/// Base URL for the Groq OpenAI-compatible chat endpoint.
const API_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Fixed request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for Groq API communication.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    model: String,
    temperature: f64,
    base_url: String,
}

impl GroqClient {
    /// Creates a new Groq API client.
    pub fn new(api_key: &str, model: String, temperature: f64) -> Result<Self, AgropilotError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                AgropilotError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AgropilotError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            temperature,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends a single-message chat request and returns the response text.
    pub async fn complete_chat(&self, prompt: &str) -> Result<String, AgropilotError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AgropilotError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!("Groq API error ({}): {}", api_err.error.type_, api_err.error.message)
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(AgropilotError::Provider {
                message,
                source: None,
            });
        }

        let payload: ChatResponse =
            response.json().await.map_err(|e| AgropilotError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AgropilotError::Provider {
                message: "API response contained no choices".to_string(),
                source: None,
            })
    }
}
