//! Thumbnails for the preset picker.
//!
//! The picker shows every preset at full strength on a small square crop
//! of the current layer. Thumbnails are center-cropped to a square, resized
//! with bilinear filtering, then rendered once per preset. Each preset
//! renders independently of the others.

use image::imageops::{self, FilterType};

use crate::catalog::list_all;
use crate::compile::{compile_preset, MAX_INTENSITY};
use crate::css::to_css_filter;
use crate::raster::Raster;
use crate::render::render;
use crate::FilterError;

/// Edge length of a picker thumbnail in the editor.
pub const DEFAULT_PREVIEW_SIZE: u32 = 96;

/// One rendered picker entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetPreview {
    pub name: &'static str,
    pub label: &'static str,
    /// Thumbnail with the preset applied at full strength.
    pub image: Raster,
    /// Equivalent CSS filter, when one exists.
    pub css: Option<String>,
}

/// Center-crop `source` to a square and resize it to `size x size`.
///
/// # Errors
/// `InvalidDimensions` if `size` is zero or the source buffer is malformed.
/// A zero-area source is returned unchanged.
pub fn preview_thumbnail(source: &Raster, size: u32) -> Result<Raster, FilterError> {
    source.validate()?;
    if size == 0 {
        return Err(FilterError::InvalidDimensions {
            width: 0,
            height: 0,
            len: source.pixels.len(),
        });
    }
    if source.is_empty() {
        return Ok(source.clone());
    }

    let img = source
        .to_rgba_image()
        .ok_or_else(|| FilterError::Image("Failed to create RgbaImage".to_string()))?;

    let (x, y, side) = square_crop(source.width, source.height);
    let cropped = imageops::crop_imm(&img, x, y, side, side).to_image();

    // Fast path: crop already has the requested size
    if side == size {
        return Ok(Raster::from_rgba_image(cropped));
    }

    let resized = imageops::resize(&cropped, size, size, FilterType::Triangle);
    Ok(Raster::from_rgba_image(resized))
}

/// Render one thumbnail per catalog preset, in display order.
pub fn render_previews(source: &Raster, size: u32) -> Result<Vec<PresetPreview>, FilterError> {
    let thumb = preview_thumbnail(source, size)?;

    list_all()
        .iter()
        .map(|preset| {
            let ops = compile_preset(preset, MAX_INTENSITY);
            Ok(PresetPreview {
                name: preset.name,
                label: preset.label,
                image: render(&thumb, &ops)?,
                css: to_css_filter(&ops),
            })
        })
        .collect()
}

/// Largest centered square: (left, top, side).
fn square_crop(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}
