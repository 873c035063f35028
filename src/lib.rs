//! Ondas - WAV Audio Inspection
//!
//! Ondas decodes canonical PCM WAV files into an immutable [`SampleBuffer`]
//! and answers basic questions about the decoded audio: sample rate, channel
//! count, duration, per-channel data, and amplitude extrema.
//!
//! A file is parsed once at construction; every accessor afterwards is an
//! infallible read-only query over the decoded samples.
//!
//! # Example
//!
//! ```no_run
//! use ondas::SampleBuffer;
//!
//! let audio = SampleBuffer::load("take_one.wav")?;
//! println!(
//!     "{} Hz, {} ch, {:.2}s, peak {}",
//!     audio.sampling_rate(),
//!     audio.channel_count(),
//!     audio.duration(),
//!     audio.max(),
//! );
//! # Ok::<(), ondas::OndasError>(())
//! ```

pub mod audio;
pub mod error;

// Re-export commonly used types
pub use audio::{load_wav, SampleBuffer, SampleType};
pub use error::{OndasError, Result};
