//! Audio file I/O operations
//!
//! Handles loading WAV files using the hound crate. Only uncompressed
//! integer PCM (16/24/32-bit, mono or stereo) is accepted; float WAV,
//! 8-bit PCM and compressed codecs are rejected as format errors.

use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::debug;

use crate::audio::buffer::{SampleBuffer, SampleType};
use crate::error::{OndasError, Result};

/// Load a WAV file into a SampleBuffer
///
/// Reads the whole file, preserves the raw integer sample values (widened
/// to `i32`), and deinterleaves them into per-channel vectors. The file
/// handle is dropped before this returns, on success and on failure.
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<SampleBuffer> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| wav_error(path, e))?;
    let spec = reader.spec();

    debug!(
        "opened {}: {} Hz, {} ch, {}-bit {:?}",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format
    );

    if spec.channels == 0 || spec.channels > 2 {
        return Err(OndasError::FormatError {
            path: path.display().to_string(),
            reason: format!(
                "unsupported channel count: {} (only mono and stereo)",
                spec.channels
            ),
        });
    }

    let sample_type = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => SampleType::Int16,
        (SampleFormat::Int, 24) => SampleType::Int24,
        (SampleFormat::Int, 32) => SampleType::Int32,
        (format, bits) => {
            return Err(OndasError::FormatError {
                path: path.display().to_string(),
                reason: format!("unsupported sample format: {:?} {}-bit", format, bits),
            })
        }
    };

    // Read interleaved samples at their native width, widened to i32
    let interleaved: Vec<i32> = match sample_type {
        SampleType::Int16 => reader
            .into_samples::<i16>()
            .map(|s| s.map(i32::from).map_err(|e| wav_error(path, e)))
            .collect::<Result<_>>()?,
        SampleType::Int24 | SampleType::Int32 => reader
            .into_samples::<i32>()
            .map(|s| s.map_err(|e| wav_error(path, e)))
            .collect::<Result<_>>()?,
    };

    let channels = deinterleave(path, interleaved, spec.channels)?;
    let buffer = SampleBuffer::from_parts(path, channels, sample_type, spec.sample_rate)?;

    debug!(
        "decoded {}: {} sampling points, {:.3}s",
        path.display(),
        buffer.number_of_sampling_points(),
        buffer.duration()
    );

    Ok(buffer)
}

/// Split an interleaved sample stream into one vector per channel
fn deinterleave(path: &Path, interleaved: Vec<i32>, channel_count: u16) -> Result<Vec<Vec<i32>>> {
    let stride = channel_count as usize;
    if interleaved.len() % stride != 0 {
        return Err(OndasError::FormatError {
            path: path.display().to_string(),
            reason: format!(
                "sample count {} is not divisible by channel count {}",
                interleaved.len(),
                channel_count
            ),
        });
    }
    if stride == 1 {
        return Ok(vec![interleaved]);
    }
    Ok((0..stride)
        .map(|c| interleaved.iter().skip(c).step_by(stride).copied().collect())
        .collect())
}

/// Map a hound error onto the crate taxonomy: I/O failures stay I/O
/// failures, everything else is a malformed or unsupported WAV.
fn wav_error(path: &Path, err: hound::Error) -> OndasError {
    match err {
        hound::Error::IoError(source) => OndasError::ReadError {
            path: path.display().to_string(),
            source,
        },
        other => OndasError::FormatError {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    }
}
