//! Audio buffer and WAV decoding
//!
//! This module provides the decoded sample buffer and the WAV file loader.

mod buffer;
mod io;

pub use buffer::{SampleBuffer, SampleType};
pub use io::load_wav;
