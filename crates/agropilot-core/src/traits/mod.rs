// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits consumed by the Agropilot handlers.
//!
//! Implementations live in their own crates (`agropilot-groq`,
//! `agropilot-geo`); the handlers only ever see these trait objects, which
//! keeps every external service swappable in tests.

pub mod geocode;
pub mod provider;
pub mod weather;

pub use geocode::Geocoder;
pub use provider::CompletionProvider;
pub use weather::WeatherProvider;
