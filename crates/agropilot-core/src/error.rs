// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Agropilot assistant.

use thiserror::Error;

/// The primary error type used across all Agropilot collaborator traits and
/// core operations.
///
/// Handlers are expected to catch these at the dispatch boundary and degrade
/// to a user-facing text response; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum AgropilotError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (API failure, malformed response, missing key).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Weather lookup errors (request failure, non-200, unparseable payload).
    #[error("weather error: {message}")]
    Weather {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reverse geocoding errors.
    #[error("geocoding error: {message}")]
    Geocode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image decoding or classification model errors.
    #[error("vision error: {0}")]
    Vision(String),

    /// Knowledge base loading errors (unreadable directory or file).
    #[error("knowledge error: {source}")]
    Knowledge {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
