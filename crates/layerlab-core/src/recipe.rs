//! Per-preset recipes: ordered tables of interpolated steps.
//!
//! Each preset owns a `&'static [Step]`. A step names one operation kind,
//! the value it starts from as intensity leaves zero, and the value it
//! reaches at full strength. Presets use different subsets of operations
//! and different start/full values, so there is no single formula shared
//! by all parameters.

use crate::operation::Operation;

/// Operation kind a recipe step produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepKind {
    Brightness,
    Contrast,
    Saturate,
    HueRotate,
    Grayscale,
    Sepia,
}

/// One interpolated entry in a preset recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub kind: StepKind,
    /// Value as `t` approaches 0. Usually the identity for the kind.
    pub from: f32,
    /// Value at `t = 1`.
    pub to: f32,
}

impl Step {
    pub const fn brightness(to: f32) -> Self {
        Self::new(StepKind::Brightness, 1.0, to)
    }

    pub const fn contrast(to: f32) -> Self {
        Self::new(StepKind::Contrast, 1.0, to)
    }

    pub const fn saturate(to: f32) -> Self {
        Self::new(StepKind::Saturate, 1.0, to)
    }

    pub const fn hue_rotate(to_radians: f32) -> Self {
        Self::new(StepKind::HueRotate, 0.0, to_radians)
    }

    pub const fn grayscale(to: f32) -> Self {
        Self::new(StepKind::Grayscale, 0.0, to)
    }

    pub const fn sepia(to: f32) -> Self {
        Self::new(StepKind::Sepia, 0.0, to)
    }

    /// Override the starting value. Silvertone starts grayscale at 0.1.
    pub const fn starting_at(self, from: f32) -> Self {
        Self::new(self.kind, from, self.to)
    }

    const fn new(kind: StepKind, from: f32, to: f32) -> Self {
        Self { kind, from, to }
    }

    /// Interpolated parameter at `t` in [0, 1].
    #[inline]
    pub fn value_at(&self, t: f32) -> f32 {
        lerp(self.from, self.to, t)
    }

    /// Build the operation for this step at `t` in [0, 1].
    pub fn at(&self, t: f32) -> Operation {
        let v = self.value_at(t);
        match self.kind {
            StepKind::Brightness => Operation::Brightness(v),
            StepKind::Contrast => Operation::Contrast(v),
            StepKind::Saturate => Operation::Saturate(v),
            StepKind::HueRotate => Operation::HueRotate(v),
            StepKind::Grayscale => Operation::Grayscale(v),
            StepKind::Sepia => Operation::Sepia(v),
        }
    }
}

/// Linear interpolation, exact at both `t = 0` and `t = 1` and monotonic
/// in `t`. The result never leaves the range between `from` and `to`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    if t >= 1.0 {
        return to;
    }
    let v = from + (to - from) * t;
    if from <= to {
        v.clamp(from, to)
    } else {
        v.clamp(to, from)
    }
}
