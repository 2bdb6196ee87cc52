// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! ONNX-backed leaf classifier for local inference.
//!
//! Loads a trained InceptionV3 export from disk and runs it on CPU with a
//! single thread.

use std::path::Path;
use std::sync::Mutex;

use agropilot_core::AgropilotError;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::TensorRef;
use tracing::info;

use crate::labels::DISEASE_CLASSES;
use crate::model::LeafModel;
use crate::preprocess::ImageBatch;

/// Leaf classifier running a trained ONNX model.
pub struct OnnxLeafModel {
    /// ONNX Runtime session (not Send, wrapped in Mutex for safety).
    session: Mutex<Session>,
    /// Name of the model's input tensor, captured at load time.
    input_name: String,
}

// Safety: Session is accessed through Mutex which provides synchronization.
unsafe impl Send for OnnxLeafModel {}
unsafe impl Sync for OnnxLeafModel {}

impl OnnxLeafModel {
    /// Load the model from an `.onnx` file on disk.
    pub fn load(model_path: &Path) -> Result<Self, AgropilotError> {
        let session = Session::builder()
            .map_err(|e| AgropilotError::Vision(format!("failed to create ONNX session builder: {e}")))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| AgropilotError::Vision(format!("failed to set optimization level: {e}")))?
            .with_intra_threads(1)
            .map_err(|e| AgropilotError::Vision(format!("failed to set thread count: {e}")))?
            .commit_from_file(model_path)
            .map_err(|e| {
                AgropilotError::Vision(format!(
                    "failed to load ONNX model from {}: {e}",
                    model_path.display()
                ))
            })?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .ok_or_else(|| AgropilotError::Vision("model has no input tensor".to_string()))?;

        info!(path = %model_path.display(), input = %input_name, "ONNX leaf model loaded");

        Ok(Self {
            session: Mutex::new(session),
            input_name,
        })
    }
}

impl LeafModel for OnnxLeafModel {
    fn predict(&self, batch: &ImageBatch) -> Result<Vec<f32>, AgropilotError> {
        let mut session = self
            .session
            .lock()
            .map_err(|e| AgropilotError::Vision(format!("failed to lock ONNX session: {e}")))?;

        let input_tensor = TensorRef::from_array_view(&batch.pixels)
            .map_err(|e| AgropilotError::Vision(format!("failed to create input tensor: {e}")))?;

        let outputs = session
            .run(ort::inputs![self.input_name.as_str() => input_tensor])
            .map_err(|e| AgropilotError::Vision(format!("ONNX inference failed: {e}")))?;

        // Extract output: shape [1, num_classes].
        let (_, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| AgropilotError::Vision(format!("failed to extract output tensor: {e}")))?;

        if data.len() < DISEASE_CLASSES.len() {
            return Err(AgropilotError::Vision(format!(
                "model produced {} scores, expected {}",
                data.len(),
                DISEASE_CLASSES.len()
            )));
        }

        Ok(data[..DISEASE_CLASSES.len()].to_vec())
    }

    fn is_demo(&self) -> bool {
        false
    }
}
