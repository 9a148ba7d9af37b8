//! CSS `filter` descriptors for compiled sequences.
//!
//! The preview grid can hand filtering to the browser compositor instead
//! of running the pixel loop. The descriptor lists the same operations in
//! the same order with the same values, so both paths agree.

use std::fmt::Write;

use crate::compile::compile;
use crate::operation::Operation;

/// Value CSS uses for "no filter".
pub const NO_FILTER: &str = "none";

/// Format a sequence as a CSS `filter` value.
///
/// Returns `"none"` for the empty sequence and `None` when the sequence
/// contains a color overlay, which has no filter-function equivalent.
pub fn to_css_filter(ops: &[Operation]) -> Option<String> {
    if ops.is_empty() {
        return Some(NO_FILTER.to_string());
    }

    let mut out = String::new();
    for op in ops {
        if !out.is_empty() {
            out.push(' ');
        }
        // Writing to a String cannot fail
        let _ = match *op {
            Operation::Brightness(v) => write!(out, "brightness({})", v),
            Operation::Contrast(v) => write!(out, "contrast({})", v),
            Operation::Saturate(v) => write!(out, "saturate({})", v),
            Operation::HueRotate(v) => write!(out, "hue-rotate({}rad)", v),
            Operation::Grayscale(v) => write!(out, "grayscale({})", v),
            Operation::Sepia(v) => write!(out, "sepia({})", v),
            Operation::ColorOverlay { .. } => return None,
        };
    }
    Some(out)
}

/// Compile and format in one step.
pub fn css_filter_for(preset_name: &str, intensity: f32) -> Option<String> {
    to_css_filter(&compile(preset_name, intensity))
}
