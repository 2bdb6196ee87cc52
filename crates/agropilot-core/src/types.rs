// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Agropilot workspace.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Unique identifier for a conversation session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Role {
    #[strum(serialize = "User")]
    User,
    #[strum(serialize = "Assistant")]
    Assistant,
}

/// A single turn in a conversation.
///
/// Turns are owned exclusively by the conversation memory window and are
/// never persisted across process restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A current-weather reading returned by a [`WeatherProvider`].
///
/// Temperature is kept in Kelvin as delivered by the upstream API; callers
/// convert via [`WeatherReading::temperature_celsius`].
///
/// [`WeatherProvider`]: crate::traits::WeatherProvider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Air temperature in Kelvin.
    pub temperature_k: f64,
    /// Relative humidity in percent.
    pub humidity_pct: f64,
    /// Rainfall over the last hour in millimeters (0.0 when absent).
    pub rainfall_mm: f64,
}

impl WeatherReading {
    /// Air temperature converted to degrees Celsius.
    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_k - 273.15
    }
}
