// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leaf disease classification for Agropilot.
//!
//! The [`DiseaseDetector`] wraps a [`LeafModel`] behind a fixed six-label
//! contract. Two implementations exist, selected at construction:
//!
//! - [`OnnxLeafModel`]: a trained image classifier loaded from disk.
//! - [`HeuristicLeafModel`]: a deterministic fallback that derives a label
//!   purely from aggregate brightness and color-channel statistics.
//!
//! `classify` never fails: a missing model, an undecodable image, or a
//! model error each map to a fixed result the caller can render directly.

pub mod detector;
pub mod heuristic;
pub mod labels;
pub mod model;
pub mod onnx;
pub mod preprocess;

pub use detector::{Detection, DiseaseDetector};
pub use heuristic::HeuristicLeafModel;
pub use model::LeafModel;
pub use onnx::OnnxLeafModel;
pub use preprocess::{preprocess, ImageBatch, TARGET_SIZE};
