// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reverse geocoding trait for location analysis.

use async_trait::async_trait;

use crate::error::AgropilotError;

/// Resolves a coordinate pair to a human-readable place name.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the display name for the coordinates, or `None` when the
    /// location cannot be resolved.
    async fn reverse_geocode(&self, lat: f64, lon: f64)
        -> Result<Option<String>, AgropilotError>;
}
