// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Location analysis for Agropilot: current-weather lookup (OpenWeather),
//! reverse geocoding (Nominatim), and the pure soybean suitability scorer.
//!
//! The HTTP clients are blocking-equivalent single calls with a fixed
//! timeout and no retry: a failed lookup degrades to an
//! "unsuitable, weather data unavailable" verdict upstream rather than
//! propagating an error to the user.

pub mod geocode;
pub mod suitability;
pub mod weather;

pub use geocode::NominatimClient;
pub use suitability::{assess_suitability, SuitabilityOutcome, SuitabilityVerdict};
pub use weather::OpenWeatherClient;
