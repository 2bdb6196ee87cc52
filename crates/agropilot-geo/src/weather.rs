// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenWeather current-weather client.

use std::time::Duration;

use agropilot_core::{AgropilotError, WeatherProvider, WeatherReading};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Base URL for the OpenWeather current-weather endpoint.
const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Fixed request timeout. One attempt only; first failure is final.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Current-weather payload, reduced to the fields the scorer consumes.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainSection,
    #[serde(default)]
    rain: Option<RainSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    /// Temperature in Kelvin (OpenWeather default units).
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize, Default)]
struct RainSection {
    #[serde(rename = "1h", default)]
    one_hour: f64,
}

/// HTTP client for the OpenWeather current-weather API.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Creates a new client with the given API key.
    pub fn new(api_key: String) -> Result<Self, AgropilotError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AgropilotError::Weather {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
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
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReading, AgropilotError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| AgropilotError::Weather {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, lat, lon, "weather response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgropilotError::Weather {
                message: format!("API returned {status}: {body}"),
                source: None,
            });
        }

        let payload: WeatherResponse =
            response.json().await.map_err(|e| AgropilotError::Weather {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(WeatherReading {
            temperature_k: payload.main.temp,
            humidity_pct: payload.main.humidity,
            rainfall_mm: payload.rain.map(|r| r.one_hour).unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn parses_current_weather_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": { "temp": 298.15, "humidity": 60 },
                "rain": { "1h": 1.2 }
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new("test-key".into())
            .unwrap()
            .with_base_url(server.uri());
        let reading = client.current_weather(-13.96, 33.79).await.unwrap();

        assert!((reading.temperature_celsius() - 25.0).abs() < 1e-9);
        assert_eq!(reading.humidity_pct, 60.0);
        assert_eq!(reading.rainfall_mm, 1.2);
    }

    #[tokio::test]
    async fn missing_rain_section_defaults_to_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "main": { "temp": 290.0, "humidity": 45 }
            })))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new("test-key".into())
            .unwrap()
            .with_base_url(server.uri());
        let reading = client.current_weather(0.0, 0.0).await.unwrap();
        assert_eq!(reading.rainfall_mm, 0.0);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&server)
            .await;

        let client = OpenWeatherClient::new("bad-key".into())
            .unwrap()
            .with_base_url(server.uri());
        let err = client.current_weather(0.0, 0.0).await.unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
