//! Layerlab Core - Filter engine for the Layerlab editor
//!
//! This crate turns a preset name and an intensity slider value into an
//! ordered list of color operations, and renders that list over an RGBA
//! raster. Everything here is pure: no I/O, no global mutable state, so
//! any function can be called from several workers at once.

pub mod cache;
pub mod catalog;
pub mod color;
pub mod compile;
pub mod css;
pub mod encode;
pub mod luminance;
pub mod operation;
pub mod preview;
pub mod raster;
pub mod recipe;
pub mod render;

mod error;

pub use cache::CompileCache;
pub use catalog::{list_all, lookup, FilterPreset, PresetSettings};
pub use compile::{clamp_intensity, compile, compile_preset};
pub use css::{css_filter_for, to_css_filter};
pub use error::FilterError;
pub use operation::{BlendMode, Operation, Rgb};
pub use preview::{preview_thumbnail, render_previews, PresetPreview};
pub use raster::Raster;
pub use render::{apply_filter, render, render_image};

/// The filter the user has picked for a layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FilterSelection {
    /// Preset name (catalog key)
    pub preset: String,
    /// Intensity (0 to 100)
    pub intensity: f32,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            preset: catalog::ORIGINAL.to_string(),
            intensity: compile::MAX_INTENSITY,
        }
    }
}

impl FilterSelection {
    /// Create a selection, clamping the intensity.
    pub fn new(preset: impl Into<String>, intensity: f32) -> Self {
        Self {
            preset: preset.into(),
            intensity: clamp_intensity(intensity),
        }
    }

    /// Compile this selection into its operation sequence.
    pub fn operations(&self) -> Vec<Operation> {
        compile(&self.preset, self.intensity)
    }

    /// Check if this selection renders as the identity transform.
    pub fn is_identity(&self) -> bool {
        self.operations().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_default_is_original() {
        let selection = FilterSelection::default();
        assert_eq!(selection.preset, "original");
        assert_eq!(selection.intensity, 100.0);
        assert!(selection.is_identity());
    }

    #[test]
    fn test_selection_clamps_intensity() {
        let selection = FilterSelection::new("noir", 140.0);
        assert_eq!(selection.intensity, 100.0);
        assert!(!selection.is_identity());
    }

    #[test]
    fn test_selection_operations() {
        let selection = FilterSelection::new("mono", 50.0);
        assert_eq!(selection.operations(), vec![Operation::Grayscale(0.5)]);
    }

    #[test]
    fn test_unknown_selection_is_identity() {
        assert!(FilterSelection::new("nonexistent", 80.0).is_identity());
    }

    #[test]
    fn test_engine_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Raster>();
        assert_send_sync::<Operation>();
        assert_send_sync::<FilterPreset>();
        assert_send_sync::<CompileCache>();
    }

    #[test]
    fn test_parallel_renders_agree() {
        let src = Raster::filled(8, 8, [180, 90, 30, 255]).unwrap();
        let expected = apply_filter(&src, "dramatic", 70.0).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let src = src.clone();
                std::thread::spawn(move || apply_filter(&src, "dramatic", 70.0))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    }

    #[test]
    fn test_render_logs_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            assert!(compile("nonexistent", 80.0).is_empty());
            let src = Raster::filled(2, 2, [1, 2, 3, 4]).unwrap();
            let out = apply_filter(&src, "vivid", 100.0).unwrap();
            assert_eq!(out.pixels.len(), 16);
        });
    }
}
