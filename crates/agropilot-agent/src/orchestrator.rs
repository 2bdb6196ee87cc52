// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-session orchestrator: routes each request to its handler and
//! renders the handler result as user-facing text.

use std::sync::Arc;

use agropilot_core::{Geocoder, SessionId, WeatherProvider};
use agropilot_geo::{assess_suitability, SuitabilityOutcome, SuitabilityVerdict};
use agropilot_router::{Intent, IntentRouter};
use agropilot_vision::{Detection, DiseaseDetector};
use tracing::{info, warn};
use uuid::Uuid;

use crate::chat::ChatHandler;

/// Label used when reverse geocoding cannot resolve the coordinates.
const UNKNOWN_LOCATION: &str = "Unknown location";

/// Fixed reply for the translation route (feature stub).
const TRANSLATION_STUB: &str = "**Translation Feature Coming Soon!**\n\n\
We're working on adding multi-language translation capabilities to help farmers worldwide.\n\n\
**What's coming:**\n\
• Real-time text translation\n\
• Voice message translation\n\
• Agricultural terminology support\n\
• Multiple language support\n\
• Offline translation capabilities\n\n\
For now, I can help you in English with all your soybean farming questions!\n\n\
**Ask me about:**\n\
• Planting and cultivation\n\
• Disease identification\n\
• Climate and weather guidance\n\
• Soil management\n\
• Harvest timing";

/// Fixed reply when the disease route receives no image.
const IMAGE_REQUIRED: &str = "**Image Required for Disease Detection**\n\n\
Please upload a clear image of soybean leaves showing:\n\
• Close-up view of affected areas\n\
• Good lighting conditions\n\
• Multiple leaves if possible\n\
• Focus on symptoms (spots, discoloration, etc.)";

/// Per-session context object tying the handlers together.
///
/// One instance per conversational session; requests are processed
/// synchronously end-to-end with no internal parallelism.
pub struct Orchestrator {
    session_id: SessionId,
    router: IntentRouter,
    chat: ChatHandler,
    weather: Option<Arc<dyn WeatherProvider>>,
    geocoder: Option<Arc<dyn Geocoder>>,
    detector: DiseaseDetector,
}

impl Orchestrator {
    /// Wire up a new session.
    ///
    /// `weather`/`geocoder` are `None` when unconfigured; the location
    /// route then reports weather data as unavailable.
    pub fn new(
        chat: ChatHandler,
        weather: Option<Arc<dyn WeatherProvider>>,
        geocoder: Option<Arc<dyn Geocoder>>,
        detector: DiseaseDetector,
    ) -> Self {
        let session_id = SessionId(Uuid::new_v4().to_string());
        info!(session_id = %session_id, "session started");

        Self {
            session_id,
            router: IntentRouter::new(),
            chat,
            weather,
            geocoder,
            detector,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Main entry point: route the request and answer it.
    ///
    /// Always returns text, never errors — every failure mode inside a
    /// handler degrades to a user-facing message.
    pub async fn handle(
        &mut self,
        message: &str,
        image: Option<&[u8]>,
        lat: f64,
        lon: f64,
    ) -> String {
        let intent = self.router.route(message, image.is_some());
        info!(session_id = %self.session_id, intent = %intent, "handling request");

        match intent {
            Intent::Translation => TRANSLATION_STUB.to_string(),
            Intent::LocationAnalysis => self.process_location(lat, lon).await,
            Intent::DiseaseDetection => self.process_disease(image),
            Intent::Chat => self.chat.process_message(message).await,
        }
    }

    /// Reset the session's conversation state.
    pub fn reset(&mut self) {
        self.chat.reset();
    }

    async fn process_location(&self, lat: f64, lon: f64) -> String {
        if lat == 0.0 && lon == 0.0 {
            return "Please provide your location coordinates for climate analysis.".to_string();
        }

        let Some(weather) = &self.weather else {
            warn!(session_id = %self.session_id, "weather provider not configured");
            return format_unavailable(&SuitabilityOutcome::weather_unavailable());
        };

        let reading = match weather.current_weather(lat, lon).await {
            Ok(reading) => reading,
            Err(e) => {
                warn!(session_id = %self.session_id, error = %e, "weather lookup failed");
                return format_unavailable(&SuitabilityOutcome::weather_unavailable());
            }
        };

        let location_label = match &self.geocoder {
            Some(geocoder) => match geocoder.reverse_geocode(lat, lon).await {
                Ok(Some(name)) => name,
                Ok(None) => UNKNOWN_LOCATION.to_string(),
                Err(e) => {
                    warn!(session_id = %self.session_id, error = %e, "reverse geocode failed");
                    UNKNOWN_LOCATION.to_string()
                }
            },
            None => UNKNOWN_LOCATION.to_string(),
        };

        let verdict = assess_suitability(&reading, &location_label);
        format_verdict(&verdict)
    }

    fn process_disease(&self, image: Option<&[u8]>) -> String {
        let Some(image_bytes) = image else {
            return IMAGE_REQUIRED.to_string();
        };

        let detection = self.detector.classify(image_bytes);
        format_detection(&detection)
    }
}

/// Render a scored suitability verdict.
fn format_verdict(verdict: &SuitabilityVerdict) -> String {
    let mut response = if verdict.suitable {
        "Location suitable for soybeans!\n".to_string()
    } else {
        "Location may need adjustments for soybeans.\n".to_string()
    };

    if verdict.location_label != UNKNOWN_LOCATION {
        response.push_str(&format!("Location: {}\n", verdict.location_label));
    }
    response.push_str(&format!("Temperature: {:.1}°C\n", verdict.temperature_c));
    response.push_str(&format!("Humidity: {:.0}%\n", verdict.humidity_pct));

    response.push_str("\nRecommendations:\n");
    for rec in &verdict.recommendations {
        response.push_str(&format!("• {rec}\n"));
    }

    response
}

/// Render the unavailable-weather outcome.
fn format_unavailable(outcome: &SuitabilityOutcome) -> String {
    match outcome {
        SuitabilityOutcome::Unavailable {
            reason,
            recommendations,
        } => {
            let mut response =
                format!("Location may need adjustments for soybeans.\nReason: {reason}\n");
            response.push_str("\nRecommendations:\n");
            for rec in recommendations {
                response.push_str(&format!("• {rec}\n"));
            }
            response
        }
        SuitabilityOutcome::Assessed(verdict) => format_verdict(verdict),
    }
}

/// Render a detection result, including the demo banner and per-class
/// score breakdown where applicable.
fn format_detection(detection: &Detection) -> String {
    match detection.label.as_str() {
        "unavailable" => {
            return format!(
                "**Disease Detection Unavailable**\n\n\
                 **Issue:** {}\n\n\
                 **Recommendation:** {}\n\n\
                 **Note:** {}",
                detection.treatment, detection.prevention, detection.note
            );
        }
        "error" => {
            return format!(
                "**Image Analysis Failed**\n\n\
                 **Error:** {}\n\n\
                 **Suggestion:** {}\n\n\
                 **Note:** {}",
                detection.treatment, detection.prevention, detection.note
            );
        }
        _ => {}
    }

    let mut response = if detection.is_demo {
        "**Disease Analysis - DEMONSTRATION MODE**\n\n".to_string()
    } else {
        "**Disease Analysis Results**\n\n".to_string()
    };

    response.push_str(&format!("**Detection:** {}\n", display_label(&detection.label)));

    if detection.confidence > 0.0 {
        response.push_str(&format!(
            "**Confidence:** {:.1}%\n",
            detection.confidence * 100.0
        ));
    }

    response.push_str(&format!("**Treatment:** {}\n", detection.treatment));
    response.push_str(&format!("**Prevention:** {}\n", detection.prevention));

    if detection.all_scores.len() > 1 {
        response.push_str("\n**Detailed Analysis:**\n");
        let mut sorted = detection.all_scores.clone();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (label, score) in sorted.iter().take(3) {
            response.push_str(&format!(
                "   • {}: {:.1}%\n",
                display_label(label),
                score * 100.0
            ));
        }
    }

    if !detection.note.is_empty() {
        response.push_str(&format!("\n**Important:** {}\n", detection.note));
    }

    if !detection.is_demo {
        response.push_str(
            "\n**Recommendation:** Always consult an agricultural expert for \
             confirmation and professional advice.",
        );
    }

    response
}

/// "bacterial_blight" -> "Bacterial Blight".
fn display_label(label: &str) -> String {
    label
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_label_title_cases_underscored_names() {
        assert_eq!(display_label("bacterial_blight"), "Bacterial Blight");
        assert_eq!(display_label("healthy"), "Healthy");
        assert_eq!(display_label("frogeye_leaf_spot"), "Frogeye Leaf Spot");
    }

    #[test]
    fn verdict_formatting_lists_recommendations() {
        let verdict = SuitabilityVerdict {
            suitable: true,
            temperature_c: 25.0,
            humidity_pct: 60.0,
            rainfall_mm: 0.0,
            recommendations: vec![
                "Temperature is ideal for soybean growth".to_string(),
                "Humidity levels are suitable".to_string(),
            ],
            location_label: "Lilongwe, Malawi".to_string(),
        };

        let text = format_verdict(&verdict);
        assert!(text.starts_with("Location suitable for soybeans!"));
        assert!(text.contains("Location: Lilongwe, Malawi"));
        assert!(text.contains("Temperature: 25.0°C"));
        assert!(text.contains("Humidity: 60%"));
        assert!(text.contains("• Temperature is ideal for soybean growth"));
    }

    #[test]
    fn unavailable_formatting_names_the_reason() {
        let text = format_unavailable(&SuitabilityOutcome::weather_unavailable());
        assert!(text.contains("Reason: Weather data unavailable"));
        assert!(text.contains("• Check your internet connection and try again"));
    }
}
