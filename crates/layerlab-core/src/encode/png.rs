//! PNG encoding for export.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::{check_raster, EncodeError};
use crate::raster::Raster;

/// Encode an RGBA raster to PNG bytes.
///
/// # Errors
///
/// `InvalidDimensions` for zero-area rasters, `InvalidPixelData` when the
/// buffer length is wrong, `EncodingFailed` if the codec errors.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    check_raster(raster)?;

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_signature() {
        let raster = Raster::filled(10, 10, [200, 100, 50, 128]).unwrap();
        let bytes = encode_png(&raster).unwrap();
        assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_roundtrips_alpha() {
        let raster = Raster::filled(3, 2, [10, 20, 30, 77]).unwrap();
        let bytes = encode_png(&raster).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30, 77]);
    }

    #[test]
    fn test_encode_png_zero_area() {
        let raster = Raster::new(0, 5, vec![]).unwrap();
        assert!(matches!(
            encode_png(&raster),
            Err(EncodeError::InvalidDimensions { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_encode_png_short_buffer() {
        let raster = Raster {
            width: 4,
            height: 4,
            pixels: vec![0u8; 60],
        };
        assert!(matches!(
            encode_png(&raster),
            Err(EncodeError::InvalidPixelData {
                expected: 64,
                actual: 60
            })
        ));
    }
}
