//! Luminance weights shared by the color matrices.
//!
//! Two weight sets exist because the Filter Effects shorthands use them
//! differently: `grayscale()` uses full-precision ITU-R BT.709 coefficients,
//! while `saturate()` and `hue-rotate()` use the rounded three-digit values.
//! Keeping both here makes the pixel path match what a browser compositor
//! produces for the same CSS filter string.

/// ITU-R BT.709 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.2126;

/// ITU-R BT.709 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.7152;

/// ITU-R BT.709 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.0722;

/// Rounded red weight used by the saturate and hue-rotate matrices.
pub const MATRIX_LUMA_R: f32 = 0.213;

/// Rounded green weight used by the saturate and hue-rotate matrices.
pub const MATRIX_LUMA_G: f32 = 0.715;

/// Rounded blue weight used by the saturate and hue-rotate matrices.
pub const MATRIX_LUMA_B: f32 = 0.072;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");

        let rounded = MATRIX_LUMA_R + MATRIX_LUMA_G + MATRIX_LUMA_B;
        assert!((rounded - 1.0).abs() < 1e-6);
    }
}
