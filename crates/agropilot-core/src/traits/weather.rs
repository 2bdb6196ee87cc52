// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weather lookup trait for location analysis.

use async_trait::async_trait;

use crate::error::AgropilotError;
use crate::types::WeatherReading;

/// Provides the current weather for a coordinate pair.
///
/// A failed lookup degrades to an "unsuitable, weather data unavailable"
/// verdict upstream; the scorer never guesses.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches the current weather reading at the given coordinates.
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherReading, AgropilotError>;
}
