//! Shared types for prediction results

use serde::{Deserialize, Serialize};

/// Result of classifying one uploaded image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Human-readable class label
    pub label: String,

    /// Model output index the label was derived from
    pub class_index: usize,

    /// Confidence score (0.0-1.0) reported for the winning class
    pub score: f32,

    /// End-to-end pipeline latency in microseconds
    pub latency_us: u64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: impl Into<String>, class_index: usize, score: f32) -> Self {
        Self {
            label: label.into(),
            class_index,
            score,
            latency_us: 0,
        }
    }

    /// Confidence formatted as a percentage, e.g. `97.31%`
    pub fn score_percent(&self) -> String {
        format!("{:.2}%", self.score * 100.0)
    }
}
