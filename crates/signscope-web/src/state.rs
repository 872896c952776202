use crate::config::ServerConfig;
use signscope_model::{ArtifactSpec, InferencePipeline, ModelHandle};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state.
///
/// Owns the once-per-process model handle; the inference pipeline borrows it
/// through an `Arc`, so every request hits the same cached predictor.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Once-only predictor handle
    pub model: Arc<ModelHandle>,

    /// Inference pipeline over the model handle
    pub pipeline: Arc<InferencePipeline>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let spec = ArtifactSpec::new(config.model_url.clone(), config.model_path.clone())
            .with_timeout(Duration::from_secs(config.download_timeout_secs));
        let model = Arc::new(ModelHandle::new(spec));
        let pipeline = Arc::new(InferencePipeline::new(model.clone()));

        Self {
            config: Arc::new(config),
            model,
            pipeline,
        }
    }
}
