// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic heuristic classifier used when no trained model loads.
//!
//! Derives a probability vector purely from aggregate image statistics:
//! thresholds on mean brightness and per-channel means select one of five
//! fixed templates, then bounded jitter seeded from the image's own
//! brightness is added so results are repeatable for a given image.

use agropilot_core::AgropilotError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::labels::DISEASE_CLASSES;
use crate::model::LeafModel;
use crate::preprocess::ImageBatch;

/// Bright, green-dominant image: likely healthy.
const TEMPLATE_HEALTHY: [f32; 6] = [0.75, 0.08, 0.05, 0.04, 0.04, 0.04];

/// Reddish tones: rust or blight leaning.
const TEMPLATE_REDDISH: [f32; 6] = [0.15, 0.35, 0.15, 0.25, 0.05, 0.05];

/// Dark image: severe disease or rot.
const TEMPLATE_DARK: [f32; 6] = [0.05, 0.15, 0.15, 0.15, 0.40, 0.10];

/// Low green content: possible disease.
const TEMPLATE_LOW_GREEN: [f32; 6] = [0.20, 0.25, 0.20, 0.15, 0.10, 0.10];

/// Mixed characteristics: uncertain.
const TEMPLATE_UNCERTAIN: [f32; 6] = [0.30, 0.20, 0.15, 0.15, 0.10, 0.10];

/// Jitter bound added per class before renormalization.
const JITTER: f32 = 0.03;

/// Deterministic statistics-based fallback classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicLeafModel;

impl HeuristicLeafModel {
    pub fn new() -> Self {
        Self
    }

    /// Pick the base template from image statistics. Check order matters:
    /// the first matching rule wins.
    fn select_template(brightness: f32, [red, green, _blue]: [f32; 3]) -> [f32; 6] {
        if green > 0.6 && brightness > 0.5 {
            TEMPLATE_HEALTHY
        } else if red > green && red > 0.4 {
            TEMPLATE_REDDISH
        } else if brightness < 0.3 {
            TEMPLATE_DARK
        } else if green < 0.4 {
            TEMPLATE_LOW_GREEN
        } else {
            TEMPLATE_UNCERTAIN
        }
    }
}

impl LeafModel for HeuristicLeafModel {
    fn predict(&self, batch: &ImageBatch) -> Result<Vec<f32>, AgropilotError> {
        let brightness = batch.mean_brightness();
        let channels = batch.channel_means();
        let template = Self::select_template(brightness, channels);

        // Seeded from the image itself: the same image always jitters the
        // same way.
        let seed = (brightness * 1000.0) as u64 % 100;
        let mut rng = StdRng::seed_from_u64(seed);

        let mut probabilities: Vec<f32> = template
            .iter()
            .map(|p| (p + rng.gen_range(-JITTER..JITTER)).abs())
            .collect();

        let sum: f32 = probabilities.iter().sum();
        if sum > f32::EPSILON {
            for p in &mut probabilities {
                *p /= sum;
            }
        }

        debug_assert_eq!(probabilities.len(), DISEASE_CLASSES.len());
        Ok(probabilities)
    }

    fn is_demo(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    fn uniform_batch(color: [f32; 3]) -> ImageBatch {
        let mut pixels = Array4::<f32>::zeros((1, 8, 8, 3));
        for y in 0..8 {
            for x in 0..8 {
                for c in 0..3 {
                    pixels[[0, y, x, c]] = color[c];
                }
            }
        }
        ImageBatch { pixels }
    }

    fn argmax(probs: &[f32]) -> usize {
        probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap()
    }

    #[test]
    fn bright_green_image_predicts_healthy() {
        let model = HeuristicLeafModel::new();
        let probs = model.predict(&uniform_batch([0.45, 0.9, 0.5])).unwrap();
        assert_eq!(DISEASE_CLASSES[argmax(&probs)], "healthy");
    }

    #[test]
    fn dark_image_predicts_severe_disease() {
        let model = HeuristicLeafModel::new();
        let probs = model.predict(&uniform_batch([0.08, 0.08, 0.08])).unwrap();
        let label = DISEASE_CLASSES[argmax(&probs)];
        assert_ne!(label, "healthy");
        assert_eq!(label, "charcoal_rot");
    }

    #[test]
    fn reddish_image_leans_blight_or_rust() {
        let model = HeuristicLeafModel::new();
        let probs = model.predict(&uniform_batch([0.6, 0.3, 0.2])).unwrap();
        let label = DISEASE_CLASSES[argmax(&probs)];
        assert!(label == "bacterial_blight" || label == "soybean_rust");
    }

    #[test]
    fn probabilities_sum_to_one() {
        let model = HeuristicLeafModel::new();
        let probs = model.predict(&uniform_batch([0.5, 0.5, 0.5])).unwrap();
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4);
        assert!(probs.iter().all(|p| *p >= 0.0));
    }

    #[test]
    fn prediction_is_repeatable_for_the_same_image() {
        let model = HeuristicLeafModel::new();
        let batch = uniform_batch([0.42, 0.42, 0.42]);
        let first = model.predict(&batch).unwrap();
        let second = model.predict(&batch).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn reports_itself_as_demo() {
        assert!(HeuristicLeafModel::new().is_demo());
    }
}
