// SPDX-FileCopyrightText: 2026 Agropilot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deterministic image preprocessing for the leaf classifier.
//!
//! Pipeline: decode -> 3-channel RGB -> resize to 299x299 -> normalize
//! pixel values to [0, 1] -> wrap in a single-item batch.

use agropilot_core::AgropilotError;
use image::imageops::FilterType;
use ndarray::{Array4, Axis};

/// Square input dimension expected by the classifier (InceptionV3 layout).
pub const TARGET_SIZE: u32 = 299;

/// A single preprocessed image in HWC layout with a leading batch
/// dimension of 1: shape `(1, 299, 299, 3)`, values in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct ImageBatch {
    pub pixels: Array4<f32>,
}

impl ImageBatch {
    /// Mean pixel value across all channels, in `[0, 1]`.
    pub fn mean_brightness(&self) -> f32 {
        self.pixels.mean().unwrap_or(0.0)
    }

    /// Per-channel means `[red, green, blue]`, in `[0, 1]`.
    pub fn channel_means(&self) -> [f32; 3] {
        let mut means = [0.0f32; 3];
        for (c, mean) in means.iter_mut().enumerate() {
            *mean = self
                .pixels
                .index_axis(Axis(3), c)
                .mean()
                .unwrap_or(0.0);
        }
        means
    }
}

/// Decode raw image bytes and run the fixed preprocessing pipeline.
pub fn preprocess(image_bytes: &[u8]) -> Result<ImageBatch, AgropilotError> {
    let decoded = image::load_from_memory(image_bytes)
        .map_err(|e| AgropilotError::Vision(format!("failed to decode image: {e}")))?;

    // to_rgb8 collapses alpha and grayscale inputs into 3-channel RGB.
    let rgb = decoded.to_rgb8();
    let resized = image::imageops::resize(&rgb, TARGET_SIZE, TARGET_SIZE, FilterType::Triangle);

    let size = TARGET_SIZE as usize;
    let mut pixels = Array4::<f32>::zeros((1, size, size, 3));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            pixels[[0, y as usize, x as usize, c]] = f32::from(pixel.0[c]) / 255.0;
        }
    }

    Ok(ImageBatch { pixels })
}
