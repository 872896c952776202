use serde::{Deserialize, Serialize};
use signscope_model::{DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_MODEL_PATH, DEFAULT_MODEL_URL};
use std::path::PathBuf;

/// Server configuration, derived from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub address: String,

    /// Listen port
    pub port: u16,

    /// Local path the model artifact is cached at
    pub model_path: PathBuf,

    /// Remote URL the artifact is downloaded from on first run
    pub model_url: String,

    /// Bound on the artifact download, in seconds
    pub download_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3000,
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            model_url: DEFAULT_MODEL_URL.to_string(),
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
        }
    }
}
