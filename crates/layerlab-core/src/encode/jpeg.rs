//! JPEG encoding for export.
//!
//! JPEG has no alpha channel; the alpha byte of each pixel is dropped and
//! the color channels are written as-is.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::{check_raster, EncodeError};
use crate::raster::{Raster, CHANNELS};

/// Encode an RGBA raster to JPEG bytes.
///
/// # Arguments
///
/// * `raster` - The filtered raster to export
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(raster: &Raster, quality: u8) -> Result<Vec<u8>, EncodeError> {
    check_raster(raster)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let rgb: Vec<u8> = raster
        .pixels
        .chunks_exact(CHANNELS)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, raster.width, raster.height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=40, 1u32..=40)
    }

    proptest! {
        /// Property: Valid rasters always produce a well-formed JPEG stream.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 1u8..=100,
            rgba in any::<[u8; 4]>(),
        ) {
            let bytes = encode_jpeg(&Raster::filled(width, height, rgba).unwrap(), quality);
            prop_assert!(bytes.is_ok());

            let bytes = bytes.unwrap();
            let len = bytes.len();
            prop_assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&bytes[len - 2..], &[0xFF, 0xD9]);
        }

        /// Property: Decoded size matches the raster.
        #[test]
        fn prop_dimensions_preserved(
            (width, height) in dimensions_strategy(),
        ) {
            let raster = Raster::filled(width, height, [60, 120, 180, 255]).unwrap();
            let bytes = encode_jpeg(&raster, 85).unwrap();
            let decoded = image::load_from_memory(&bytes).unwrap();
            prop_assert_eq!((decoded.width(), decoded.height()), (width, height));
        }
    }
}
