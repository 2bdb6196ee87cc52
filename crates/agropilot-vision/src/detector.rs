// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The disease detector: preprocessing, model dispatch, and the fixed
//! three-state result contract (unavailable / ok / error).

use std::path::{Path, PathBuf};

use agropilot_config::model::VisionConfig;
use tracing::{info, warn};

use crate::heuristic::HeuristicLeafModel;
use crate::labels::{prevention_advice, treatment_advice, DISEASE_CLASSES};
use crate::model::LeafModel;
use crate::onnx::OnnxLeafModel;
use crate::preprocess;

/// Result of classifying one image. Created per image, never persisted.
#[derive(Debug, Clone)]
pub struct Detection {
    /// One of the fixed disease classes, or "unknown"/"unavailable"/"error".
    pub label: String,
    /// Max of the output probability vector; 0.0 for the degraded states.
    pub confidence: f32,
    pub treatment: String,
    pub prevention: String,
    pub note: String,
    /// True when the heuristic fallback produced this result.
    pub is_demo: bool,
    /// Per-class scores in label-table order; empty for degraded states.
    pub all_scores: Vec<(String, f32)>,
}

/// Classifies leaf images behind the fixed label contract.
///
/// `classify` never fails and never panics: every failure mode maps to a
/// renderable [`Detection`].
pub struct DiseaseDetector {
    model: Option<Box<dyn LeafModel>>,
    model_path: PathBuf,
}

impl DiseaseDetector {
    /// Build a detector from configuration.
    ///
    /// Tries the trained ONNX model first; falls back to the deterministic
    /// heuristic when allowed, otherwise detection reports itself
    /// unavailable.
    pub fn from_config(config: &VisionConfig) -> Self {
        let model_path = PathBuf::from(&config.model_path);

        match OnnxLeafModel::load(&model_path) {
            Ok(model) => {
                info!("disease detection using trained model");
                Self::with_model(Box::new(model), model_path)
            }
            Err(e) if config.heuristic_fallback => {
                warn!(error = %e, "trained model unavailable, using heuristic classifier");
                Self::with_model(Box::new(HeuristicLeafModel::new()), model_path)
            }
            Err(e) => {
                warn!(error = %e, "trained model unavailable, disease detection disabled");
                Self::disabled(model_path)
            }
        }
    }

    /// Build a detector around an explicit model implementation.
    pub fn with_model(model: Box<dyn LeafModel>, model_path: PathBuf) -> Self {
        Self {
            model: Some(model),
            model_path,
        }
    }

    /// Build a detector with no model: every classify reports unavailable.
    pub fn disabled(model_path: PathBuf) -> Self {
        Self {
            model: None,
            model_path,
        }
    }

    /// True when a model (trained or heuristic) is loaded.
    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Classify raw image bytes into a single detection.
    pub fn classify(&self, image_bytes: &[u8]) -> Detection {
        let Some(model) = self.model.as_deref() else {
            return Detection::unavailable(&self.model_path);
        };

        let batch = match preprocess::preprocess(image_bytes) {
            Ok(batch) => batch,
            Err(e) => return Detection::error(&e.to_string()),
        };

        let probabilities = match model.predict(&batch) {
            Ok(p) => p,
            Err(e) => return Detection::error(&e.to_string()),
        };

        let (best_idx, confidence) = probabilities
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, p)| (i, *p))
            .unwrap_or((usize::MAX, 0.0));

        let label = DISEASE_CLASSES.get(best_idx).copied().unwrap_or("unknown");

        let note = if model.is_demo() {
            "DEMONSTRATION MODE: This analysis is for demonstration purposes only. \
             Results are based on basic image analysis, not a trained AI model. \
             For accurate disease diagnosis, please consult an agricultural expert."
        } else {
            "AI-POWERED ANALYSIS: Results from trained disease detection model. \
             For confirmation and treatment advice, consult an agricultural expert."
        };

        Detection {
            label: label.to_string(),
            confidence,
            treatment: treatment_advice(label).to_string(),
            prevention: prevention_advice(label).to_string(),
            note: note.to_string(),
            is_demo: model.is_demo(),
            all_scores: DISEASE_CLASSES
                .iter()
                .zip(probabilities.iter())
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
        }
    }
}

impl Detection {
    /// Fixed result when no model is loaded.
    fn unavailable(model_path: &Path) -> Self {
        Self {
            label: "unavailable".to_string(),
            confidence: 0.0,
            treatment: "Disease detection is currently unavailable. No model found.".to_string(),
            prevention: "For disease identification, please consult a local agricultural \
                         expert or extension officer."
                .to_string(),
            note: format!(
                "To enable real disease detection, place a trained model file at: {}",
                model_path.display()
            ),
            is_demo: false,
            all_scores: Vec::new(),
        }
    }

    /// Fixed result when decoding or prediction fails. The failure message
    /// becomes user-facing treatment text.
    fn error(message: &str) -> Self {
        Self {
            label: "error".to_string(),
            confidence: 0.0,
            treatment: format!("Detection error: {message}"),
            prevention: "Please try with a clearer image or consult an agricultural expert."
                .to_string(),
            note: "Image analysis failed. Please ensure the image is clear and shows \
                   soybean leaves."
                .to_string(),
            is_demo: false,
            all_scores: Vec::new(),
        }
    }
}
