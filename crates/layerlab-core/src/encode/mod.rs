//! Export encoding for filtered rasters.
//!
//! This module provides functionality for:
//! - Encoding RGBA rasters to PNG (lossless, keeps alpha)
//! - Encoding RGBA rasters to JPEG with configurable quality (alpha dropped)
//!
//! Both encoders validate the raster before touching the codec, so a
//! malformed buffer never produces a partial file.

mod jpeg;
mod png;

pub use jpeg::encode_jpeg;
pub use png::encode_png;

use crate::raster::Raster;
use thiserror::Error;

/// Errors that can occur during export encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero, or the byte size overflows
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Shared validation for both encoders.
fn check_raster(raster: &Raster) -> Result<(), EncodeError> {
    if raster.is_empty() {
        return Err(EncodeError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }

    let expected = raster.expected_len().ok_or(EncodeError::InvalidDimensions {
        width: raster.width,
        height: raster.height,
    })?;
    if raster.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: raster.pixels.len(),
        });
    }
    Ok(())
}
