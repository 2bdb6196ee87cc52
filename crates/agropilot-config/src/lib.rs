// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for the Agropilot assistant.
//!
//! TOML files merge over compiled defaults, with `AGROPILOT_*` environment
//! variables taking final precedence. Validation is warning-only: a missing
//! API key degrades the corresponding feature at runtime instead of
//! refusing to start.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::AgropilotConfig;

/// Validate a loaded configuration, returning human-readable warnings.
///
/// Nothing here is fatal: a missing Groq key means chat answers with an
/// informational message, and a missing OpenWeather key means location
/// analysis reports weather data as unavailable.
pub fn validate(config: &AgropilotConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    if config.groq.api_key.is_none() && std::env::var("GROQ_API_KEY").is_err() {
        warnings.push(
            "groq.api_key is not set (required for chat functionality)".to_string(),
        );
    }

    if config.weather.api_key.is_none() && std::env::var("OPENWEATHER_API_KEY").is_err() {
        warnings.push(
            "weather.api_key is not set (required for location analysis)".to_string(),
        );
    }

    if config.knowledge.top_k == 0 {
        warnings.push("knowledge.top_k is 0; chat will retrieve no knowledge".to_string());
    }

    warnings
}
