// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered keyword matching from message text to handler intent.

use tracing::debug;

/// The coarse category of help a request needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Multi-language translation (currently a stub handler).
    Translation,
    /// Weather-based location suitability analysis.
    LocationAnalysis,
    /// Image-based plant disease detection.
    DiseaseDetection,
    /// General farming Q&A backed by the knowledge base.
    Chat,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Translation => write!(f, "translation"),
            Intent::LocationAnalysis => write!(f, "location_analysis"),
            Intent::DiseaseDetection => write!(f, "disease_detection"),
            Intent::Chat => write!(f, "chat"),
        }
    }
}

/// Translation keywords (contains, case-insensitive). Checked first.
const TRANSLATION_KEYWORDS: &[&str] = &[
    "translate",
    "translation",
    "chichewa",
    "shona",
    "zulu",
    "xhosa",
    "afrikaans",
    "swati",
    "language",
];

/// Location/weather keywords (contains, case-insensitive). Checked second.
const LOCATION_KEYWORDS: &[&str] = &[
    "location",
    "weather",
    "climate",
    "suitable",
    "temperature",
    "rainfall",
    "humidity",
    "region",
    "area",
];

/// Disease/pest/symptom keywords (contains, case-insensitive). Checked third.
const DISEASE_KEYWORDS: &[&str] = &[
    "disease",
    "sick",
    "problem",
    "spots",
    "leaves",
    "infection",
    "pest",
    "damage",
    "dying",
];

/// Keyword intent router with zero cost and zero latency.
///
/// Pure function of its inputs: no scoring, no ties. Precedence is list
/// order — the first keyword set with a hit wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentRouter;

impl IntentRouter {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message into the handler intent.
    ///
    /// An attached image forces [`Intent::DiseaseDetection`] unless a
    /// translation or location keyword claims the message first.
    pub fn route(&self, message: &str, has_image: bool) -> Intent {
        let lower = message.to_lowercase();

        let intent = if TRANSLATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            Intent::Translation
        } else if LOCATION_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            Intent::LocationAnalysis
        } else if has_image || DISEASE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            Intent::DiseaseDetection
        } else {
            Intent::Chat
        };

        debug!(intent = %intent, has_image, "routed message");
        intent
    }
}
