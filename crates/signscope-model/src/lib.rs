//! Signscope Model
//!
//! Model acquisition and inference for the traffic-sign classifier:
//! - Provisioning of the pretrained artifact (download-if-absent,
//!   validate-if-present, bounded timeout)
//! - A once-per-process model handle that loads the predictor lazily
//! - Image preprocessing into the fixed (1, 32, 32, channels) input tensor
//! - The inference pipeline mapping model output to a labeled prediction
//!
//! The classifier itself is an opaque pretrained artifact; this crate only
//! performs a forward pass.

pub mod loader;
pub mod pipeline;
pub mod predictor;
pub mod preprocess;
pub mod provision;

pub use loader::ModelHandle;
pub use pipeline::{argmax, InferencePipeline};
pub use predictor::{SignPredictor, INPUT_CHANNELS};
pub use preprocess::{preprocess, preprocess_image, INPUT_SIZE};
pub use provision::{
    validate_artifact, ArtifactSpec, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_MODEL_PATH,
    DEFAULT_MODEL_URL,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::loader::ModelHandle;
    pub use crate::pipeline::InferencePipeline;
    pub use crate::predictor::SignPredictor;
    pub use crate::provision::ArtifactSpec;
}
