//! Once-per-process model handle.
//!
//! The expensive provision-and-deserialize step runs at most once, even
//! under concurrent first access; every caller after the first receives the
//! same cached predictor. A failed initialization is cached too: the model
//! is unavailable for the rest of the process lifetime and a restart (plus
//! artifact invalidation) is the only reload mechanism.

use signscope_core::{Error, Result};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::predictor::SignPredictor;
use crate::provision::ArtifactSpec;

type InitResult = std::result::Result<Arc<SignPredictor>, Arc<Error>>;

/// Lazily-initialized, once-only-constructed handle to the predictor.
///
/// Owned by the application's top-level state and passed explicitly to the
/// inference pipeline; there is no hidden global.
pub struct ModelHandle {
    spec: ArtifactSpec,
    cell: OnceCell<InitResult>,
}

impl ModelHandle {
    /// Create a handle for the given artifact spec
    pub fn new(spec: ArtifactSpec) -> Self {
        Self {
            spec,
            cell: OnceCell::new(),
        }
    }

    /// The artifact spec this handle provisions from
    pub fn artifact(&self) -> &ArtifactSpec {
        &self.spec
    }

    /// Whether the predictor has been constructed successfully
    pub fn is_loaded(&self) -> bool {
        matches!(self.cell.get(), Some(Ok(_)))
    }

    /// Get the cached predictor, provisioning and loading it on first call.
    pub async fn predictor(&self) -> Result<Arc<SignPredictor>> {
        let slot = self
            .cell
            .get_or_init(|| async {
                match self.init().await {
                    Ok(predictor) => Ok(Arc::new(predictor)),
                    Err(e) => {
                        error!("model initialization failed: {e}");
                        Err(Arc::new(e))
                    }
                }
            })
            .await;

        match slot {
            Ok(predictor) => Ok(predictor.clone()),
            Err(e) => Err(e.replayed()),
        }
    }

    async fn init(&self) -> Result<SignPredictor> {
        let path = self.spec.ensure_available().await?;
        info!(path = %path.display(), "loading traffic-sign model");
        let predictor = SignPredictor::load(&path)?;
        info!("model loaded");
        Ok(predictor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handle_is_not_loaded() {
        let handle = ModelHandle::new(ArtifactSpec::default());
        assert!(!handle.is_loaded());
    }
}
