//! Executes an operation sequence against an RGBA raster.
//!
//! ## Execution Model
//! 1. Validate the source buffer against its dimensions
//! 2. Resolve each operation into a matrix or fill once
//! 3. Per pixel, run every step in sequence order
//! 4. Quantize back to 8 bits into a fresh buffer
//!
//! The source is never mutated. A rejected source produces no output.

use crate::color::{composite_fill, PixelStep};
use crate::compile::compile;
use crate::operation::Operation;
use crate::raster::{Raster, CHANNELS};
use crate::FilterError;

/// Render `ops` over `source`, returning a new raster of equal dimensions.
///
/// # Errors
/// Returns `FilterError::InvalidDimensions` if the pixel buffer length does
/// not equal `width * height * 4`. Zero-area rasters with an empty buffer
/// are valid and come back unchanged.
#[tracing::instrument(level = "debug", skip_all, fields(width = source.width, height = source.height, ops = ops.len()))]
pub fn render(source: &Raster, ops: &[Operation]) -> Result<Raster, FilterError> {
    source.validate()?;

    // Early exit: empty sequence or nothing to draw
    if ops.is_empty() || source.is_empty() {
        return Ok(source.clone());
    }

    let steps: Vec<PixelStep> = ops
        .iter()
        .filter(|op| !op.is_identity())
        .map(PixelStep::from)
        .collect();
    let mut pixels = source.pixels.clone();

    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let mut rgb = [
            chunk[0] as f32 / 255.0,
            chunk[1] as f32 / 255.0,
            chunk[2] as f32 / 255.0,
        ];
        let mut alpha = chunk[3] as f32 / 255.0;

        for step in &steps {
            match *step {
                PixelStep::Matrix(ref m) => rgb = m.apply(rgb),
                PixelStep::Fill {
                    color,
                    alpha: fill_alpha,
                    blend,
                } => {
                    (rgb, alpha) = composite_fill(rgb, alpha, color, fill_alpha, blend);
                }
            }
        }

        chunk[0] = to_u8(rgb[0]);
        chunk[1] = to_u8(rgb[1]);
        chunk[2] = to_u8(rgb[2]);
        chunk[3] = to_u8(alpha);
    }

    Ok(Raster {
        width: source.width,
        height: source.height,
        pixels,
    })
}

/// Compile `preset_name` at `intensity` and render it over `source`.
pub fn apply_filter(
    source: &Raster,
    preset_name: &str,
    intensity: f32,
) -> Result<Raster, FilterError> {
    render(source, &compile(preset_name, intensity))
}

/// Render over an `image::RgbaImage`.
pub fn render_image(
    source: &image::RgbaImage,
    ops: &[Operation],
) -> Result<image::RgbaImage, FilterError> {
    let (width, height) = source.dimensions();
    let raster = Raster {
        width,
        height,
        pixels: source.as_raw().clone(),
    };
    render(&raster, ops)?
        .to_rgba_image()
        .ok_or_else(|| FilterError::Image("rendered buffer does not fit its dimensions".to_string()))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::list_all;
    use crate::luminance::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};
    use crate::operation::{BlendMode, Rgb};

    /// Helper to create a 1x1 raster from RGBA values
    fn pixel(r: u8, g: u8, b: u8, a: u8) -> Raster {
        Raster::filled(1, 1, [r, g, b, a]).unwrap()
    }

    /// Gradient test image with distinct values per pixel
    fn gradient(width: u32, height: u32) -> Raster {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) * 7 % 256) as u8;
                pixels.extend_from_slice(&[v, 255 - v, v / 2, 200]);
            }
        }
        Raster {
            width,
            height,
            pixels,
        }
    }

    // ===== Identity Tests =====

    #[test]
    fn test_empty_sequence_is_bit_identical() {
        let src = gradient(16, 9);
        assert_eq!(render(&src, &[]).unwrap(), src);
    }

    #[test]
    fn test_identity_operations_round_trip_every_value() {
        let mut pixels = Vec::new();
        for v in 0..=255u8 {
            pixels.extend_from_slice(&[v, v, v, v]);
        }
        let src = Raster::new(256, 1, pixels).unwrap();
        let ops = [
            Operation::Brightness(1.0),
            Operation::Contrast(1.0),
            Operation::Grayscale(0.0),
        ];
        assert_eq!(render(&src, &ops).unwrap(), src);
    }

    // ===== Scenario Tests =====

    #[test]
    fn test_mono_half_on_red() {
        let src = pixel(255, 0, 0, 255);
        let out = apply_filter(&src, "mono", 50.0).unwrap();
        let [r, g, b, a] = out.pixel(0, 0).unwrap();

        assert_eq!([r, g, b], [155, 27, 27]);
        assert_eq!(g, b);
        assert_eq!(a, 255, "Alpha should be untouched");
        // Desaturation keeps the BT.709 luminance of pure red
        let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
        assert!((lum - 54.0).abs() <= 1.5);
    }

    #[test]
    fn test_mono_full_on_red_is_gray() {
        let out = apply_filter(&pixel(255, 0, 0, 255), "mono", 100.0).unwrap();
        assert_eq!(out.pixel(0, 0), Some([54, 54, 54, 255]));
    }

    #[test]
    fn test_unknown_preset_renders_identity() {
        let src = gradient(4, 4);
        assert_eq!(apply_filter(&src, "nonexistent", 80.0).unwrap(), src);
    }

    #[test]
    fn test_brightness_halves() {
        let out = render(&pixel(200, 100, 50, 255), &[Operation::Brightness(0.5)]).unwrap();
        assert_eq!(out.pixel(0, 0), Some([100, 50, 25, 255]));
    }

    #[test]
    fn test_order_matters() {
        let src = pixel(200, 80, 40, 255);
        let a = render(&src, &[Operation::Brightness(2.0), Operation::Contrast(0.5)]).unwrap();
        let b = render(&src, &[Operation::Contrast(0.5), Operation::Brightness(2.0)]).unwrap();
        // 200 -> 255 -> 191 versus 200 -> 164 -> 255
        assert_eq!(a.pixel(0, 0).unwrap()[0], 191);
        assert_eq!(b.pixel(0, 0).unwrap()[0], 255);
    }

    #[test]
    fn test_warm_overlay_tints_gray_orange() {
        let out = render(&pixel(128, 128, 128, 255), &[Operation::warmth_overlay(0.25)]).unwrap();
        let [r, g, b, a] = out.pixel(0, 0).unwrap();
        assert!(r > 128, "Red should increase for warm");
        assert!(b < 128, "Blue should decrease for warm");
        assert!(r > g && g > b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_cool_overlay_tints_gray_blue() {
        let out = render(&pixel(128, 128, 128, 255), &[Operation::warmth_overlay(-0.2)]).unwrap();
        let [r, _, b, _] = out.pixel(0, 0).unwrap();
        assert!(b > 128 && r < 128);
    }

    #[test]
    fn test_overlay_raises_transparent_alpha() {
        let op = Operation::ColorOverlay {
            color: Rgb::new(255, 0, 0),
            alpha: 0.5,
            blend: BlendMode::Normal,
        };
        let out = render(&pixel(0, 0, 0, 0), &[op]).unwrap();
        assert_eq!(out.pixel(0, 0), Some([255, 0, 0, 128]));
    }

    // ===== Buffer Tests =====

    #[test]
    fn test_source_is_not_mutated() {
        let src = gradient(8, 8);
        let before = src.clone();
        let _ = apply_filter(&src, "noir", 100.0).unwrap();
        assert_eq!(src, before);
    }

    #[test]
    fn test_dimension_preserved_for_every_preset() {
        let src = gradient(7, 3);
        for preset in list_all() {
            let out = apply_filter(&src, preset.name, 100.0).unwrap();
            assert_eq!((out.width, out.height), (7, 3));
            assert_eq!(out.pixels.len(), src.pixels.len());
        }
    }

    #[test]
    fn test_zero_area_is_noop() {
        let src = Raster::new(0, 0, vec![]).unwrap();
        let out = render(&src, &[Operation::Contrast(2.0)]).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let src = Raster {
            width: 3,
            height: 3,
            pixels: vec![0u8; 30],
        };
        let err = render(&src, &[Operation::Brightness(1.2)]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidDimensions { width: 3, height: 3, len: 30 }));

        // Even the empty sequence validates
        assert!(render(&src, &[]).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let src = Raster {
            width: 1 << 31,
            height: 1 << 31,
            pixels: vec![],
        };
        let err = render(&src, &[Operation::Brightness(1.2)]).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidDimensions {
                width: 1 << 31,
                height: 1 << 31,
                len: 0
            }
        );
        assert!(render(&src, &[]).is_err());
    }

    #[test]
    fn test_zero_alpha_overlay_leaves_transparent_pixel() {
        let src = pixel(10, 20, 30, 0);
        let out = render(&src, &[Operation::warmth_overlay(0.0)]).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn test_render_image() {
        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([255, 0, 0, 255]));
        let out = render_image(&img, &[Operation::Grayscale(1.0)]).unwrap();
        assert_eq!(out.dimensions(), (3, 2));
        assert_eq!(out.get_pixel(2, 1).0, [54, 54, 54, 255]);
    }
}
