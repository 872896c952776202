use crate::config::ServerConfig;
use clap::Parser;
use signscope_model::{DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_MODEL_PATH, DEFAULT_MODEL_URL};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "signscope")]
#[command(
    author,
    version,
    about = "Upload a traffic-sign photo, get the predicted sign category"
)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Local path the model artifact is cached at
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Remote URL the artifact is downloaded from on first run
    #[arg(long, default_value = DEFAULT_MODEL_URL)]
    pub model_url: String,

    /// Bound on the artifact download, in seconds
    #[arg(long, default_value_t = DEFAULT_DOWNLOAD_TIMEOUT_SECS)]
    pub download_timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            address: self.address,
            port: self.port,
            model_path: self.model_path,
            model_url: self.model_url,
            download_timeout_secs: self.download_timeout_secs,
        }
    }
}
