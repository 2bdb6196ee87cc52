// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The swappable classifier contract.

use agropilot_core::AgropilotError;

use crate::preprocess::ImageBatch;

/// A leaf classifier producing one probability per disease class.
///
/// Implementations are selected at detector construction time: the trained
/// ONNX model when it loads, the deterministic heuristic otherwise.
pub trait LeafModel: Send + Sync {
    /// Predict class probabilities for a preprocessed image batch.
    ///
    /// The returned vector has one entry per entry of
    /// [`DISEASE_CLASSES`](crate::labels::DISEASE_CLASSES), in table order.
    fn predict(&self, batch: &ImageBatch) -> Result<Vec<f32>, AgropilotError>;

    /// True when results come from the heuristic fallback rather than a
    /// trained model.
    fn is_demo(&self) -> bool;
}
