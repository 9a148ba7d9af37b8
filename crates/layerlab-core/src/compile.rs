//! Preset + intensity to operation sequence.
//!
//! Intensity is a 0-100 slider value. It is clamped, never rejected: slider
//! widgets can transiently report values just outside their range.

use crate::catalog::{self, FilterPreset};
use crate::operation::Operation;

/// Highest accepted intensity.
pub const MAX_INTENSITY: f32 = 100.0;

/// Clamp an intensity to [0, 100]. NaN and -0.0 map to +0.0.
#[inline]
pub fn clamp_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() || intensity <= 0.0 {
        return 0.0;
    }
    intensity.min(MAX_INTENSITY)
}

/// Compile a preset name and intensity into an ordered operation list.
///
/// Returns an empty sequence (the identity transform) for `"original"`,
/// for intensity 0, and for unknown preset names.
pub fn compile(preset_name: &str, intensity: f32) -> Vec<Operation> {
    match catalog::lookup(preset_name) {
        Ok(preset) => compile_preset(preset, intensity),
        Err(err) => {
            tracing::debug!(%err, intensity, "falling back to original preset");
            Vec::new()
        }
    }
}

/// Compile an already resolved preset.
pub fn compile_preset(preset: &FilterPreset, intensity: f32) -> Vec<Operation> {
    let intensity = clamp_intensity(intensity);
    if preset.is_original() || intensity == 0.0 {
        return Vec::new();
    }

    let t = intensity / MAX_INTENSITY;
    preset.recipe.iter().map(|step| step.at(t)).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use super::tests::parameter;
    use crate::catalog::list_all;
    use proptest::prelude::*;

    /// Strategy for picking a catalog preset.
    fn preset_strategy() -> impl Strategy<Value = &'static FilterPreset> {
        (0..list_all().len()).prop_map(|i| &list_all()[i])
    }

    proptest! {
        /// Property: Each step moves monotonically toward its full-strength value.
        #[test]
        fn prop_interpolation_is_monotonic(
            preset in preset_strategy(),
            a in 0.0001f32..=100.0,
            b in 0.0001f32..=100.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let ops_lo = compile_preset(preset, lo);
            let ops_hi = compile_preset(preset, hi);

            for ((lo_op, hi_op), step) in ops_lo.iter().zip(&ops_hi).zip(preset.recipe) {
                let (v_lo, v_hi) = (parameter(lo_op), parameter(hi_op));
                if step.to > step.from {
                    prop_assert!(v_lo <= v_hi, "{}: {} > {}", preset.name, v_lo, v_hi);
                } else {
                    prop_assert!(v_lo >= v_hi, "{}: {} < {}", preset.name, v_lo, v_hi);
                }
            }
        }

        /// Property: Compiled values stay between the step's endpoints.
        #[test]
        fn prop_values_bounded_by_endpoints(
            preset in preset_strategy(),
            intensity in 0.0f32..=100.0,
        ) {
            for (op, step) in compile_preset(preset, intensity).iter().zip(preset.recipe) {
                let v = parameter(op);
                let (min, max) = if step.from <= step.to { (step.from, step.to) } else { (step.to, step.from) };
                prop_assert!(v >= min - 1e-6 && v <= max + 1e-6);
            }
        }

        /// Property: Out-of-range intensities compile like their clamped value.
        #[test]
        fn prop_out_of_range_clamps(
            preset in preset_strategy(),
            over in 100.0f32..1000.0,
            under in -1000.0f32..0.0,
        ) {
            prop_assert_eq!(compile_preset(preset, over), compile_preset(preset, 100.0));
            prop_assert!(compile_preset(preset, under).is_empty());
        }
    }
}
