//! Elementary color operations produced by the compiler.
//!
//! A compiled filter is an ordered `Vec<Operation>`. Order matters: a
//! hue rotation after a saturate differs from one before it.

use serde::{Deserialize, Serialize};

/// An opaque sRGB color used by overlay operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Orange overlay used for warm tints.
    pub const WARM: Rgb = Rgb::new(255, 165, 0);

    /// Blue overlay used for cool tints.
    pub const COOL: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized (0.0 to 1.0) channel values.
    #[inline]
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

/// Blend mode used when compositing a [`Operation::ColorOverlay`].
///
/// Formulas follow the W3C Compositing and Blending separable modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Plain source-over, the fill color replaces the backdrop.
    Normal,
    /// Multiply backdrop by fill.
    Multiply,
    /// Inverse multiply of inverses.
    Screen,
    /// Multiply or screen depending on the backdrop; keeps contrast.
    #[default]
    Overlay,
}

/// One elementary color transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "kebab-case")]
pub enum Operation {
    /// Linear channel scale. Identity = 1.0.
    Brightness(f32),
    /// Scale around mid-gray. Identity = 1.0.
    Contrast(f32),
    /// Saturation factor. Identity = 1.0, 0.0 is fully desaturated.
    Saturate(f32),
    /// Hue rotation in radians. Identity = 0.0.
    HueRotate(f32),
    /// Luminance-preserving desaturation amount, 0.0 to 1.0.
    Grayscale(f32),
    /// Sepia toning amount, 0.0 to 1.0. Used as a warmth operation.
    Sepia(f32),
    /// Solid fill composited over the image.
    ColorOverlay {
        color: Rgb,
        alpha: f32,
        blend: BlendMode,
    },
}

impl Operation {
    /// Overlay carrying a signed warmth value: orange when positive,
    /// blue when negative, opacity `|warmth|`.
    pub fn warmth_overlay(warmth: f32) -> Self {
        let color = if warmth >= 0.0 { Rgb::WARM } else { Rgb::COOL };
        Operation::ColorOverlay {
            color,
            alpha: warmth.abs(),
            blend: BlendMode::Overlay,
        }
    }

    /// Check if this operation leaves every pixel unchanged.
    pub fn is_identity(&self) -> bool {
        match *self {
            Operation::Brightness(v) | Operation::Contrast(v) | Operation::Saturate(v) => v == 1.0,
            Operation::HueRotate(v) | Operation::Grayscale(v) | Operation::Sepia(v) => v == 0.0,
            Operation::ColorOverlay { alpha, .. } => alpha == 0.0,
        }
    }
}
