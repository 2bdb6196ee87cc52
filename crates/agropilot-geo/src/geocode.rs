// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nominatim reverse geocoding client.

use std::time::Duration;

use agropilot_core::{AgropilotError, Geocoder};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Base URL for the Nominatim reverse endpoint.
const API_BASE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Fixed request timeout. One attempt only; first failure is final.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
}

/// HTTP client for Nominatim reverse geocoding.
///
/// Nominatim's usage policy requires an identifying User-Agent, so one is
/// set on every request.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Creates a new client identifying itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self, AgropilotError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AgropilotError::Geocode {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn reverse_geocode(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<Option<String>, AgropilotError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AgropilotError::Geocode {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, lat, lon, "reverse geocode response received");

        if !status.is_success() {
            return Err(AgropilotError::Geocode {
                message: format!("API returned {status}"),
                source: None,
            });
        }

        let payload: ReverseResponse =
            response.json().await.map_err(|e| AgropilotError::Geocode {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(payload.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn returns_display_name_when_resolved() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "display_name": "Lilongwe, Central Region, Malawi"
            })))
            .mount(&server)
            .await;

        let client = NominatimClient::new("agropilot-test")
            .unwrap()
            .with_base_url(server.uri());
        let name = client.reverse_geocode(-13.96, 33.79).await.unwrap();
        assert_eq!(name.as_deref(), Some("Lilongwe, Central Region, Malawi"));
    }

    #[tokio::test]
    async fn missing_display_name_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "Unable to geocode"
            })))
            .mount(&server)
            .await;

        let client = NominatimClient::new("agropilot-test")
            .unwrap()
            .with_base_url(server.uri());
        let name = client.reverse_geocode(0.0, 0.0).await.unwrap();
        assert!(name.is_none());
    }
}
