// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Agropilot agricultural assistant.
//!
//! This crate provides the foundational error type, shared domain types,
//! and the collaborator traits implemented by the service crates
//! (`agropilot-groq`, `agropilot-geo`).

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AgropilotError;
pub use types::{ConversationTurn, Role, SessionId, WeatherReading};

pub use traits::{CompletionProvider, Geocoder, WeatherProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_has_all_variants() {
        let _config = AgropilotError::Config("test".into());
        let _provider = AgropilotError::Provider {
            message: "test".into(),
            source: None,
        };
        let _weather = AgropilotError::Weather {
            message: "test".into(),
            source: None,
        };
        let _geocode = AgropilotError::Geocode {
            message: "test".into(),
            source: None,
        };
        let _vision = AgropilotError::Vision("test".into());
        let _knowledge = AgropilotError::Knowledge {
            source: Box::new(std::io::Error::other("test")),
        };
        let _internal = AgropilotError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_message() {
        let err = AgropilotError::Provider {
            message: "rate limited".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "provider error: rate limited");
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compile-time check that the collaborator traits are reachable
        // through the crate root.
        fn _assert_provider<T: CompletionProvider>() {}
        fn _assert_weather<T: WeatherProvider>() {}
        fn _assert_geocoder<T: Geocoder>() {}
    }
}
