//! Error types for directplay
//!
//! Expected outcomes such as "the renderer has no track group at that index"
//! are not errors; they are reported through
//! [`TrackChange`](crate::player::TrackChange). This enum covers contract
//! violations, capability query failures and resolution failures.

use thiserror::Error;

/// Main error type for directplay
#[derive(Error, Debug)]
pub enum DirectPlayError {
    /// A stream index that does not exist or has the wrong type was passed
    /// to a type-specific selector. This is a caller bug.
    #[error("Invalid stream selection: {0}")]
    InvalidStream(String),

    /// The platform capability query failed for one decoder
    #[error("Capability query failed: {0}")]
    CapabilityQuery(String),

    /// Re-resolving the media source for a restart failed
    #[error("Media source resolution failed: {0}")]
    Resolve(String),

    /// No media source is attached to the session
    #[error("No media source loaded")]
    NoMediaSource,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DirectPlayError {
    /// Create an invalid stream error from string
    pub fn invalid_stream<S: Into<String>>(msg: S) -> Self {
        DirectPlayError::InvalidStream(msg.into())
    }

    /// Whether playback can continue with the previous selection.
    ///
    /// Resolution failures mean the requested stream cannot be played at all,
    /// so the UI has to report playback as interrupted.
    pub fn interrupts_playback(&self) -> bool {
        matches!(self, DirectPlayError::Resolve(_) | DirectPlayError::NoMediaSource)
    }
}

/// Convenience type alias for Results in directplay
pub type Result<T> = std::result::Result<T, DirectPlayError>;

/// Extension trait for converting other errors to DirectPlayError
pub trait IntoPlayerError<T> {
    /// Convert this error into a DirectPlayError with the given context
    fn config_err(self, context: &str) -> Result<T>;
    fn capability_err(self, context: &str) -> Result<T>;
    fn resolve_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoPlayerError<T> for std::result::Result<T, E> {
    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| DirectPlayError::Config(format!("{}: {}", context, e)))
    }

    fn capability_err(self, context: &str) -> Result<T> {
        self.map_err(|e| DirectPlayError::CapabilityQuery(format!("{}: {}", context, e)))
    }

    fn resolve_err(self, context: &str) -> Result<T> {
        self.map_err(|e| DirectPlayError::Resolve(format!("{}: {}", context, e)))
    }
}
