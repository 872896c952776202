//! End-to-end inference pipeline: bytes in, labeled prediction out.

use signscope_core::{class_name, Error, Prediction, Result};
use std::sync::Arc;
use std::time::Instant;

use crate::loader::ModelHandle;
use crate::preprocess::preprocess;

/// Index of the maximum-valued entry, ties broken by lowest index.
pub fn argmax(scores: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            Some((_, current)) if score <= current => {}
            _ => best = Some((i, score)),
        }
    }
    best.map(|(i, _)| i)
}

/// The inference pipeline.
///
/// Holds the process-wide model handle; each call preprocesses one upload,
/// runs the cached predictor, and extracts the top class. Exactly one label
/// per call, no top-k, no thresholding.
pub struct InferencePipeline {
    handle: Arc<ModelHandle>,
}

impl InferencePipeline {
    /// Create a pipeline over the given model handle
    pub fn new(handle: Arc<ModelHandle>) -> Self {
        Self { handle }
    }

    /// Access the underlying model handle
    pub fn handle(&self) -> &ModelHandle {
        &self.handle
    }

    /// Classify one uploaded image.
    ///
    /// Provisioning/loading failures are fatal for the process and keep
    /// surfacing on every call; a malformed upload is a request-scoped error
    /// that leaves the loaded predictor untouched.
    pub async fn predict(&self, image_bytes: &[u8]) -> Result<Prediction> {
        let start = Instant::now();

        let predictor = self.handle.predictor().await?;
        let tensor = preprocess(image_bytes)?;
        let scores = predictor.predict(&tensor)?;

        let index = argmax(&scores).ok_or_else(|| Error::inference("empty score vector"))?;
        let label = class_name(index).ok_or_else(|| {
            Error::inference(format!("class index {index} outside the label table"))
        })?;

        let mut prediction = Prediction::new(label, index, scores[index]);
        prediction.latency_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            label = prediction.label,
            score = prediction.score,
            latency_us = prediction.latency_us,
            "classified upload"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argmax_picks_maximum() {
        let scores = [0.1, 0.05, 0.7, 0.15];
        assert_eq!(argmax(&scores), Some(2));
    }

    #[test]
    fn argmax_breaks_ties_by_lowest_index() {
        let scores = [0.2, 0.5, 0.5, 0.5];
        assert_eq!(argmax(&scores), Some(1));

        let all_equal = [0.25; 43];
        assert_eq!(argmax(&all_equal), Some(0));
    }

    #[test]
    fn argmax_of_empty_is_none() {
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_is_deterministic() {
        let scores: Vec<f32> = (0..43).map(|i| ((i * 37) % 43) as f32 / 43.0).collect();
        let first = argmax(&scores);
        for _ in 0..100 {
            assert_eq!(argmax(&scores), first);
        }
    }
}
