//! Sample buffer implementation
//!
//! SampleBuffer is the core data structure holding the decoded samples of a
//! WAV file, deinterleaved into one vector per channel.

use std::fmt;
use std::path::Path;

use crate::error::{OndasError, Result};

/// Declared PCM element type of a decoded WAV file.
///
/// Samples are stored widened to `i32` in memory; this records the bit
/// width the file declared, so a 16-bit file still reports as 16-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    /// 16-bit signed integer PCM
    Int16,
    /// 24-bit signed integer PCM
    Int24,
    /// 32-bit signed integer PCM
    Int32,
}

impl SampleType {
    /// Declared bits per sample
    pub fn bits(&self) -> u16 {
        match self {
            Self::Int16 => 16,
            Self::Int24 => 24,
            Self::Int32 => 32,
        }
    }

    /// Whether the sample encoding is signed. All supported PCM depths are.
    pub fn is_signed(&self) -> bool {
        true
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "int{}", self.bits())
    }
}

/// Decoded audio samples with metadata
///
/// Immutable after construction; only borrowed views of the sample data are
/// handed out, so a buffer can be shared read-only across threads.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Per-channel sample vectors, deinterleaved at load (1 = mono, 2 = stereo)
    channels: Vec<Vec<i32>>,
    /// Element type declared by the WAV header
    sample_type: SampleType,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl SampleBuffer {
    /// Load a WAV file into a SampleBuffer.
    ///
    /// The file is opened, fully decoded, and closed before this returns.
    ///
    /// # Errors
    /// * [`OndasError::ReadError`] if the path is missing or unreadable
    /// * [`OndasError::FormatError`] if the file is not uncompressed
    ///   16/24/32-bit PCM WAV with 1 or 2 channels
    /// * [`OndasError::EmptyAudio`] if the data chunk holds no samples
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        super::io::load_wav(path)
    }

    /// Build a buffer from already-deinterleaved channel data.
    ///
    /// `path` is only used for error context. Rejects channel counts other
    /// than 1 or 2, ragged channel lengths, a zero sample rate, and empty
    /// data.
    pub(crate) fn from_parts(
        path: &Path,
        channels: Vec<Vec<i32>>,
        sample_type: SampleType,
        sample_rate: u32,
    ) -> Result<Self> {
        if channels.is_empty() || channels.len() > 2 {
            return Err(OndasError::FormatError {
                path: path.display().to_string(),
                reason: format!(
                    "unsupported channel count: {} (only mono and stereo)",
                    channels.len()
                ),
            });
        }
        if sample_rate == 0 {
            return Err(OndasError::FormatError {
                path: path.display().to_string(),
                reason: "sample rate must be positive".to_string(),
            });
        }
        if channels.iter().any(|c| c.len() != channels[0].len()) {
            return Err(OndasError::FormatError {
                path: path.display().to_string(),
                reason: format!(
                    "channel lengths differ: {} vs {}",
                    channels[0].len(),
                    channels[1].len()
                ),
            });
        }
        if channels[0].is_empty() {
            return Err(OndasError::EmptyAudio {
                path: path.display().to_string(),
            });
        }
        Ok(Self {
            channels,
            sample_type,
            sample_rate,
        })
    }

    /// Get the sampling rate in Hz
    pub fn sampling_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of channels (1 = mono, 2 = stereo)
    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    /// Check if the audio is mono
    pub fn is_mono(&self) -> bool {
        self.channels.len() == 1
    }

    /// Check if the audio is stereo
    pub fn is_stereo(&self) -> bool {
        self.channels.len() == 2
    }

    /// Get the number of sampling points (samples per channel)
    pub fn number_of_sampling_points(&self) -> usize {
        self.channels[0].len()
    }

    /// Get the element type declared by the WAV header
    pub fn data_type(&self) -> SampleType {
        self.sample_type
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f64 {
        self.number_of_sampling_points() as f64 / f64::from(self.sample_rate)
    }

    /// Get the left channel. For mono audio this is the full sample
    /// sequence. The returned slice borrows the buffer's storage.
    pub fn left_channel(&self) -> &[i32] {
        &self.channels[0]
    }

    /// Get the right channel. For mono audio this is the same view as
    /// [`SampleBuffer::left_channel`].
    pub fn right_channel(&self) -> &[i32] {
        &self.channels[self.channels.len() - 1]
    }

    /// Get the maximum raw sample value over all channels
    pub fn max(&self) -> i32 {
        self.channels
            .iter()
            .flatten()
            .copied()
            .fold(i32::MIN, i32::max)
    }

    /// Get the minimum raw sample value over all channels
    pub fn min(&self) -> i32 {
        self.channels
            .iter()
            .flatten()
            .copied()
            .fold(i32::MAX, i32::min)
    }
}
