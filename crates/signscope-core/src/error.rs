//! Error types for Signscope

/// Result type alias using Signscope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Signscope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Artifact download errors (network unreachable, non-2xx, HTML body)
    #[error("download error: {0}")]
    Download(String),

    /// The model artifact failed structural validation
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    /// Image decoding or preprocessing errors
    #[error("image error: {0}")]
    Image(String),

    /// Forward-pass execution errors
    #[error("inference error: {0}")]
    Inference(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new download error
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    /// Create a new invalid-artifact error
    pub fn invalid_artifact(msg: impl Into<String>) -> Self {
        Self::InvalidArtifact(msg.into())
    }

    /// Create a new image error
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Rebuild an equivalent error from a cached one.
    ///
    /// Used where a failed one-time initialization is cached and must be
    /// surfaced to every later caller with its original kind intact.
    pub fn replayed(&self) -> Self {
        match self {
            Self::Download(m) => Self::Download(m.clone()),
            Self::InvalidArtifact(m) => Self::InvalidArtifact(m.clone()),
            Self::Image(m) => Self::Image(m.clone()),
            Self::Inference(m) => Self::Inference(m.clone()),
            Self::Config(m) => Self::Config(m.clone()),
            Self::Internal(m) => Self::Internal(m.clone()),
            Self::Io(e) => Self::Io(std::io::Error::new(e.kind(), e.to_string())),
            Self::Serialization(e) => {
                Self::Serialization(<serde_json::Error as serde::de::Error>::custom(e))
            }
        }
    }

    /// Whether this error is scoped to a single request.
    ///
    /// Request-scoped errors (a malformed upload, a bad tensor shape) must
    /// not tear down the loaded predictor; everything else halts the
    /// application flow for the rest of the process lifetime.
    pub fn is_request_scoped(&self) -> bool {
        matches!(self, Self::Image(_) | Self::Inference(_))
    }
}
