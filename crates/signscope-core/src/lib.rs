//! Signscope Core
//!
//! Core types and utilities shared across Signscope components.
//!
//! This crate provides:
//! - Error types and result handling
//! - The fixed traffic-sign class-label table
//! - The `Prediction` type returned by the inference pipeline

pub mod error;
pub mod labels;
pub mod types;

pub use error::{Error, Result};
pub use labels::{class_name, CLASS_NAMES, NUM_CLASSES};
pub use types::Prediction;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::labels::{class_name, CLASS_NAMES, NUM_CLASSES};
    pub use crate::types::Prediction;
}
