//! RGBA raster type passed in and out of the renderer.

use crate::FilterError;

/// Bytes per pixel in a [`Raster`] (RGBA8).
pub const CHANNELS: usize = 4;

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel, straight alpha).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Create a new Raster, checking that the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FilterError> {
        let raster = Self {
            width,
            height,
            pixels,
        };
        raster.validate()?;
        Ok(raster)
    }

    /// Create a raster filled with a single RGBA color.
    ///
    /// Fails when `width * height * 4` does not fit in `usize`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, FilterError> {
        let mut raster = Self {
            width,
            height,
            pixels: Vec::new(),
        };
        let len = raster.expected_len().ok_or(FilterError::InvalidDimensions {
            width,
            height,
            len: 0,
        })?;
        raster.pixels = rgba.repeat(len / CHANNELS);
        Ok(raster)
    }

    /// Create a Raster from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an `image::RgbaImage`.
    ///
    /// Returns `None` if the buffer length does not match the dimensions.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Number of bytes the dimensions call for, or `None` on overflow.
    pub fn expected_len(&self) -> Option<usize> {
        pixel_count(self.width, self.height)?.checked_mul(CHANNELS)
    }

    /// Check that the pixel buffer matches `width * height * 4`.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_len() != Some(self.pixels.len()) {
            return Err(FilterError::InvalidDimensions {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Get the total number of pixels, or `None` on overflow.
    pub fn pixel_count(&self) -> Option<usize> {
        pixel_count(self.width, self.height)
    }

    /// Check whether the raster has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?
            .checked_mul(CHANNELS)?;
        let px = self.pixels.get(idx..idx.checked_add(CHANNELS)?)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}
