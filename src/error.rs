//! Error types for Ondas
//!
//! All errors in Ondas use the OndasError type. Errors fall into two broad
//! taxa: I/O failures (the file cannot be read at all) and format failures
//! (the bytes are not a WAV file this crate can decode).

use thiserror::Error;

/// Result type alias using OndasError
pub type Result<T> = std::result::Result<T, OndasError>;

/// All possible errors in Ondas
#[derive(Error, Debug)]
pub enum OndasError {
    /// The file could not be opened or read: missing path, permission
    /// denied, or a read that failed partway through.
    #[error("failed to read audio file: {path}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but is not a WAV file this crate decodes:
    /// not RIFF/WAVE, a compressed or float format tag, an unsupported bit
    /// depth or channel count, or a truncated/malformed chunk.
    #[error("invalid WAV file {path}: {reason}")]
    FormatError { path: String, reason: String },

    /// The data chunk holds zero samples. Rejected at load so that the
    /// amplitude extrema always have an element to report.
    #[error("audio file contains no samples: {path}")]
    EmptyAudio { path: String },
}

impl OndasError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::ReadError { .. } => "Check that the file exists and is readable",
            Self::FormatError { .. } => "Convert the file to uncompressed PCM WAV (16/24/32-bit)",
            Self::EmptyAudio { .. } => "Record or export at least one sample before loading",
        }
    }
}
