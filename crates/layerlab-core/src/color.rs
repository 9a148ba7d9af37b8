//! Per-pixel color math for each operation kind.
//!
//! Every non-overlay operation is an affine map on normalized sRGB, matching
//! the matrices the W3C Filter Effects module gives for the CSS shorthand
//! filters. Overlays follow W3C Compositing: blend, then source-over.
//!
//! Channel values are clamped to [0, 1] after every step, as a browser
//! does between filter primitives.

use crate::luminance::{
    LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MATRIX_LUMA_B, MATRIX_LUMA_G, MATRIX_LUMA_R,
};
use crate::operation::{BlendMode, Operation};

/// A 3x3 color matrix plus offset, applied as `m * rgb + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    pub m: [[f32; 3]; 3],
    pub offset: [f32; 3],
}

impl ColorMatrix {
    /// `output = input * amount`
    pub fn brightness(amount: f32) -> Self {
        let a = amount.max(0.0);
        Self::scale(a, 0.0)
    }

    /// `output = (input - 0.5) * amount + 0.5`
    pub fn contrast(amount: f32) -> Self {
        let a = amount.max(0.0);
        Self::scale(a, 0.5 - 0.5 * a)
    }

    /// feColorMatrix `saturate`. Equivalent to `gray + (c - gray) * s` with
    /// the rounded luma weights.
    pub fn saturate(amount: f32) -> Self {
        let s = amount.max(0.0);
        Self::toward_gray([MATRIX_LUMA_R, MATRIX_LUMA_G, MATRIX_LUMA_B], s)
    }

    /// Luminance-preserving desaturation with BT.709 weights.
    pub fn grayscale(amount: f32) -> Self {
        let s = 1.0 - amount.clamp(0.0, 1.0);
        Self::toward_gray([LUMINANCE_R, LUMINANCE_G, LUMINANCE_B], s)
    }

    /// feColorMatrix `hueRotate`, angle in radians.
    pub fn hue_rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (lr, lg, lb) = (MATRIX_LUMA_R, MATRIX_LUMA_G, MATRIX_LUMA_B);
        Self {
            m: [
                [
                    lr + cos * (1.0 - lr) - sin * lr,
                    lg - cos * lg - sin * lg,
                    lb - cos * lb + sin * (1.0 - lb),
                ],
                [
                    lr - cos * lr + sin * 0.143,
                    lg + cos * (1.0 - lg) + sin * 0.140,
                    lb - cos * lb - sin * 0.283,
                ],
                [
                    lr - cos * lr - sin * (1.0 - lr),
                    lg - cos * lg + sin * lg,
                    lb + cos * (1.0 - lb) + sin * lb,
                ],
            ],
            offset: [0.0; 3],
        }
    }

    /// Sepia toning. `amount` 1.0 is the full sepia matrix.
    pub fn sepia(amount: f32) -> Self {
        let s = 1.0 - amount.clamp(0.0, 1.0);
        Self {
            m: [
                [0.393 + 0.607 * s, 0.769 - 0.769 * s, 0.189 - 0.189 * s],
                [0.349 - 0.349 * s, 0.686 + 0.314 * s, 0.168 - 0.168 * s],
                [0.272 - 0.272 * s, 0.534 - 0.534 * s, 0.131 + 0.869 * s],
            ],
            offset: [0.0; 3],
        }
    }

    fn scale(factor: f32, offset: f32) -> Self {
        Self {
            m: [[factor, 0.0, 0.0], [0.0, factor, 0.0], [0.0, 0.0, factor]],
            offset: [offset; 3],
        }
    }

    /// Row `i` is `weights * (1 - s)` with `s` added on the diagonal.
    fn toward_gray(weights: [f32; 3], s: f32) -> Self {
        let mut m = [[0.0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = weights[j] * (1.0 - s);
                if i == j {
                    *cell += s;
                }
            }
        }
        Self {
            m,
            offset: [0.0; 3],
        }
    }

    /// Apply to a normalized RGB triple, clamping the result to [0, 1].
    #[inline]
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut out = [0.0; 3];
        for (i, row) in self.m.iter().enumerate() {
            let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2] + self.offset[i];
            out[i] = v.clamp(0.0, 1.0);
        }
        out
    }
}

/// Blend a single channel of fill `cs` against backdrop `cb`.
#[inline]
pub fn blend_channel(mode: BlendMode, cb: f32, cs: f32) -> f32 {
    match mode {
        BlendMode::Normal => cs,
        BlendMode::Multiply => cb * cs,
        BlendMode::Screen => cb + cs - cb * cs,
        // Overlay is hard-light with the layers swapped
        BlendMode::Overlay => {
            if cb <= 0.5 {
                cs * 2.0 * cb
            } else {
                let cb2 = 2.0 * cb - 1.0;
                cs + cb2 - cs * cb2
            }
        }
    }
}

/// Composite a solid fill over one straight-alpha pixel.
///
/// Returns the new RGB and alpha, all normalized.
#[inline]
pub fn composite_fill(
    backdrop: [f32; 3],
    backdrop_alpha: f32,
    fill: [f32; 3],
    fill_alpha: f32,
    mode: BlendMode,
) -> ([f32; 3], f32) {
    let (ab, as_) = (backdrop_alpha, fill_alpha.clamp(0.0, 1.0));
    let ao = as_ + ab * (1.0 - as_);
    if ao <= 0.0 {
        return (backdrop, backdrop_alpha);
    }

    let mut out = [0.0; 3];
    for i in 0..3 {
        let blended = blend_channel(mode, backdrop[i], fill[i]);
        let source = (1.0 - ab) * fill[i] + ab * blended;
        let co = as_ * source + ab * (1.0 - as_) * backdrop[i];
        out[i] = (co / ao).clamp(0.0, 1.0);
    }
    (out, ao)
}

/// An operation resolved into the form the pixel loop executes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelStep {
    Matrix(ColorMatrix),
    Fill {
        color: [f32; 3],
        alpha: f32,
        blend: BlendMode,
    },
}

impl From<&Operation> for PixelStep {
    fn from(op: &Operation) -> Self {
        match *op {
            Operation::Brightness(v) => PixelStep::Matrix(ColorMatrix::brightness(v)),
            Operation::Contrast(v) => PixelStep::Matrix(ColorMatrix::contrast(v)),
            Operation::Saturate(v) => PixelStep::Matrix(ColorMatrix::saturate(v)),
            Operation::HueRotate(v) => PixelStep::Matrix(ColorMatrix::hue_rotate(v)),
            Operation::Grayscale(v) => PixelStep::Matrix(ColorMatrix::grayscale(v)),
            Operation::Sepia(v) => PixelStep::Matrix(ColorMatrix::sepia(v)),
            Operation::ColorOverlay {
                color,
                alpha,
                blend,
            } => PixelStep::Fill {
                color: color.to_unit(),
                alpha,
                blend,
            },
        }
    }
}
