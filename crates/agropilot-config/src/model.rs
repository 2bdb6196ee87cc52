// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Agropilot assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Agropilot configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgropilotConfig {
    /// Assistant identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Groq API settings for the chat LLM.
    #[serde(default)]
    pub groq: GroqConfig,

    /// OpenWeather API settings for location analysis.
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Reverse geocoding settings.
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Leaf disease classification settings.
    #[serde(default)]
    pub vision: VisionConfig,

    /// Knowledge base settings.
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
}

/// Assistant identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Number of user/assistant exchange pairs to keep in conversation
    /// memory. The window holds twice this many turns.
    #[serde(default = "default_max_memory_pairs")]
    pub max_memory_pairs: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            max_memory_pairs: default_max_memory_pairs(),
        }
    }
}

fn default_agent_name() -> String {
    "agropilot".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_memory_pairs() -> usize {
    4
}

/// Groq API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// Groq API key. `None` falls back to the `GROQ_API_KEY` environment
    /// variable; chat degrades to an informational message without one.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier for chat completions.
    #[serde(default = "default_groq_model")]
    pub model: String,

    /// Sampling temperature. Kept low for focused, consistent answers.
    #[serde(default = "default_groq_temperature")]
    pub temperature: f64,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_groq_model(),
            temperature: default_groq_temperature(),
        }
    }
}

fn default_groq_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

fn default_groq_temperature() -> f64 {
    0.3
}

/// OpenWeather API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeatherConfig {
    /// OpenWeather API key. `None` falls back to the `OPENWEATHER_API_KEY`
    /// environment variable; location analysis reports weather data as
    /// unavailable without one.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Reverse geocoding configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeocodingConfig {
    /// User-Agent header sent to the Nominatim API (required by its usage
    /// policy).
    #[serde(default = "default_geocoding_user_agent")]
    pub user_agent: String,
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            user_agent: default_geocoding_user_agent(),
        }
    }
}

fn default_geocoding_user_agent() -> String {
    "agropilot".to_string()
}

/// Leaf disease classification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VisionConfig {
    /// Path to the trained ONNX leaf classifier.
    #[serde(default = "default_vision_model_path")]
    pub model_path: String,

    /// Use the deterministic heuristic classifier when the trained model
    /// cannot be loaded. Disabling this makes disease detection report
    /// itself unavailable instead.
    #[serde(default = "default_heuristic_fallback")]
    pub heuristic_fallback: bool,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            model_path: default_vision_model_path(),
            heuristic_fallback: default_heuristic_fallback(),
        }
    }
}

fn default_vision_model_path() -> String {
    "./data/models/soybean_leaf_inceptionv3.onnx".to_string()
}

fn default_heuristic_fallback() -> bool {
    true
}

/// Knowledge base configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeConfig {
    /// Directory of `.txt`/`.md`/`.pdf` files loaded into the knowledge
    /// base at startup. `None` uses the built-in facts only.
    #[serde(default)]
    pub dir: Option<String>,

    /// Number of knowledge snippets retrieved per chat question.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            dir: None,
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    5
}
