// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session wiring: builds a per-session [`Orchestrator`] from the resolved
//! configuration.
//!
//! Every collaborator is optional at runtime: a missing Groq key degrades
//! chat to an informational reply, a missing OpenWeather key makes location
//! analysis report weather data as unavailable, and a missing vision model
//! falls back to the heuristic classifier (or reports detection
//! unavailable). Nothing here refuses to start.

use std::path::Path;
use std::sync::Arc;

use agropilot_agent::{ChatHandler, Orchestrator};
use agropilot_config::AgropilotConfig;
use agropilot_core::{CompletionProvider, Geocoder, WeatherProvider};
use agropilot_geo::{NominatimClient, OpenWeatherClient};
use agropilot_groq::GroqProvider;
use agropilot_knowledge::KnowledgeBase;
use agropilot_vision::DiseaseDetector;
use tracing::warn;

/// Wire up one conversational session from configuration.
pub fn build_orchestrator(config: &AgropilotConfig) -> Orchestrator {
    let knowledge = match &config.knowledge.dir {
        Some(dir) => KnowledgeBase::with_files(Path::new(dir)),
        None => KnowledgeBase::builtin(),
    };

    let provider: Option<Arc<dyn CompletionProvider>> = match GroqProvider::from_config(config) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(e) => {
            warn!(error = %e, "chat provider unavailable");
            None
        }
    };

    let weather: Option<Arc<dyn WeatherProvider>> = match resolve_weather_key(config) {
        Some(api_key) => match OpenWeatherClient::new(api_key) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                warn!(error = %e, "weather client unavailable");
                None
            }
        },
        None => {
            warn!("weather.api_key not set, location analysis will report weather unavailable");
            None
        }
    };

    let geocoder: Option<Arc<dyn Geocoder>> =
        match NominatimClient::new(&config.geocoding.user_agent) {
            Ok(client) => Some(Arc::new(client)),
            Err(e) => {
                warn!(error = %e, "geocoder unavailable");
                None
            }
        };

    let detector = DiseaseDetector::from_config(&config.vision);

    let chat = ChatHandler::new(
        provider,
        Arc::new(knowledge),
        config.agent.max_memory_pairs,
        config.knowledge.top_k,
    );

    Orchestrator::new(chat, weather, geocoder, detector)
}

/// Resolve the OpenWeather API key from config or the `OPENWEATHER_API_KEY`
/// environment variable.
fn resolve_weather_key(config: &AgropilotConfig) -> Option<String> {
    config
        .weather
        .api_key
        .clone()
        .filter(|key| !key.is_empty())
        .or_else(|| {
            std::env::var("OPENWEATHER_API_KEY")
                .ok()
                .filter(|key| !key.is_empty())
        })
}
