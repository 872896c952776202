//! Artifact provisioning: download-if-absent, validate-if-present.
//!
//! The artifact is an opaque SafeTensors blob fetched from a fixed release
//! URL on first run and cached on local storage across runs. Validation is a
//! structural header parse only, not a checksum; a file that parses is
//! handed to the loader as-is.

use signscope_core::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default remote location of the pretrained artifact
pub const DEFAULT_MODEL_URL: &str =
    "https://github.com/signscope/signscope-models/releases/download/v1.0/traffic-signs.safetensors";

/// Default local path the artifact is cached at
pub const DEFAULT_MODEL_PATH: &str = "model.safetensors";

/// Default bound on the download step, in seconds
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 60;

/// Where the model artifact lives, locally and remotely
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    /// Remote URL the artifact is fetched from
    pub url: String,

    /// Local path the artifact is cached at
    pub path: PathBuf,

    /// Bound on the whole download request
    pub timeout: Duration,
}

impl Default for ArtifactSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_URL, DEFAULT_MODEL_PATH)
    }
}

impl ArtifactSpec {
    /// Create a new artifact spec with the default timeout
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            timeout: Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
        }
    }

    /// Set the download timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a structurally valid artifact already exists on disk
    pub fn is_present_and_valid(&self) -> bool {
        self.path.exists() && validate_artifact(&self.path).is_ok()
    }

    /// Ensure a structurally valid local copy of the artifact exists.
    ///
    /// Performs no network I/O when a valid artifact is already cached.
    /// Otherwise downloads the full content from the remote URL, validates
    /// it, and moves it into place, overwriting any prior invalid content.
    pub async fn ensure_available(&self) -> Result<PathBuf> {
        if self.path.exists() {
            match validate_artifact(&self.path) {
                Ok(()) => {
                    debug!(path = %self.path.display(), "cached artifact is valid, skipping download");
                    return Ok(self.path.clone());
                }
                Err(e) => {
                    warn!(path = %self.path.display(), "cached artifact is invalid ({e}), re-downloading");
                }
            }
        }

        self.download().await?;
        Ok(self.path.clone())
    }

    /// Fetch the artifact and move it into place.
    ///
    /// The body is written to a `.part` sibling and only renamed over the
    /// destination after it passes validation, so a partial or invalid
    /// download is never left at the artifact path.
    async fn download(&self) -> Result<()> {
        info!(url = %self.url, "downloading model artifact");

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::download(format!("failed to build HTTP client: {e}")))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::download(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::download(format!(
                "server returned {status} for {}",
                self.url
            )));
        }

        // An error page served with a 200 would otherwise be written out as
        // a corrupt artifact.
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        if content_type.contains("html") {
            return Err(Error::download(
                "received an HTML page instead of a binary artifact",
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::download(format!("failed to read response body: {e}")))?;

        let part_path = self.path.with_extension("part");
        tokio::fs::write(&part_path, &bytes).await?;

        if let Err(e) = validate_artifact(&part_path) {
            let _ = tokio::fs::remove_file(&part_path).await;
            return Err(e);
        }

        tokio::fs::rename(&part_path, &self.path).await?;
        info!(
            bytes = bytes.len(),
            path = %self.path.display(),
            "model artifact stored"
        );
        Ok(())
    }
}

// Same bound the safetensors parser itself enforces; anything larger is
// rejected before we allocate for it.
const MAX_HEADER_BYTES: u64 = 100_000_000;

/// Check that the file is a well-formed SafeTensors container.
///
/// Reads only the header region (8-byte length prefix plus the JSON header)
/// and hands it to the format's own parser. This is a best-effort sanity
/// check, not a cryptographic verification.
pub fn validate_artifact(path: &Path) -> Result<()> {
    use std::io::Read;

    let mut file = std::fs::File::open(path)?;

    let mut prefix = [0u8; 8];
    file.read_exact(&mut prefix).map_err(|_| {
        Error::invalid_artifact(format!("{}: file too short for a header", path.display()))
    })?;
    let header_len = u64::from_le_bytes(prefix);
    if header_len > MAX_HEADER_BYTES {
        return Err(Error::invalid_artifact(format!(
            "{}: header length {header_len} exceeds limit",
            path.display()
        )));
    }

    let mut buf = vec![0u8; 8 + header_len as usize];
    buf[..8].copy_from_slice(&prefix);
    file.read_exact(&mut buf[8..]).map_err(|_| {
        Error::invalid_artifact(format!("{}: truncated header", path.display()))
    })?;

    safetensors::SafeTensors::read_metadata(&buf)
        .map(|_| ())
        .map_err(|e| Error::invalid_artifact(format!("{}: {e}", path.display())))
}
