//! Filter preset WASM bindings.
//!
//! Exposes the preset catalog, the compiler, the CSS descriptor and the
//! pixel renderer to the editor. The preview path uses `css_filter` where
//! possible and falls back to `apply_filter`; export always uses
//! `apply_filter`.

use crate::types::JsRaster;
use layerlab_core::{catalog, css, Operation};
use wasm_bindgen::prelude::*;

/// Selected preset and intensity wrapper for JavaScript
#[wasm_bindgen]
pub struct FilterSelection {
    inner: layerlab_core::FilterSelection,
}

#[wasm_bindgen]
impl FilterSelection {
    /// Create a selection of the original preset at full intensity
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: layerlab_core::FilterSelection::default(),
        }
    }

    /// Get preset name
    #[wasm_bindgen(getter)]
    pub fn preset(&self) -> String {
        self.inner.preset.clone()
    }

    /// Set preset name. Unknown names are kept and render as the original.
    #[wasm_bindgen(setter)]
    pub fn set_preset(&mut self, value: String) {
        if catalog::lookup(&value).is_err() {
            warn_unknown_preset(&value);
        }
        self.inner.preset = value;
    }

    /// Get intensity (0-100)
    #[wasm_bindgen(getter)]
    pub fn intensity(&self) -> f32 {
        self.inner.intensity
    }

    /// Set intensity, clamped to 0-100
    #[wasm_bindgen(setter)]
    pub fn set_intensity(&mut self, value: f32) {
        self.inner.intensity = layerlab_core::clamp_intensity(value);
    }

    /// Check if the selection renders as the unfiltered image
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// CSS filter string for this selection, or undefined if it needs pixel rendering
    pub fn css(&self) -> Option<String> {
        css::to_css_filter(&self.inner.operations())
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<FilterSelection, JsValue> {
        let mut inner: layerlab_core::FilterSelection =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        inner.intensity = layerlab_core::clamp_intensity(inner.intensity);
        Ok(Self { inner })
    }
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterSelection {
    pub(crate) fn inner(&self) -> &layerlab_core::FilterSelection {
        &self.inner
    }
}

/// List every preset in display order.
///
/// # Returns
/// An array of `{ name, label, settings }` objects.
///
/// # Example (TypeScript)
/// ```typescript
/// for (const preset of list_presets()) {
///   addButton(preset.name, preset.label);
/// }
/// ```
#[wasm_bindgen]
pub fn list_presets() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(catalog::list_all()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compile a preset and intensity into its operation list.
///
/// # Returns
/// An array of `{ op, value }` objects, e.g.
/// `[{ op: "saturate", value: 1.3 }, { op: "contrast", value: 1.25 }]`.
/// Unknown presets compile to an empty array.
#[wasm_bindgen]
pub fn compile_filter(preset_name: &str, intensity: f32) -> Result<JsValue, JsValue> {
    let ops = compile_checked(preset_name, intensity);
    serde_wasm_bindgen::to_value(&ops).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// CSS filter string for a preset, e.g. `"grayscale(0.5)"`.
///
/// Returns `"none"` for the identity transform and `undefined` when the
/// preset uses a color overlay, which must be rendered with `apply_filter`.
///
/// # Example (TypeScript)
/// ```typescript
/// const css = css_filter('vivid', slider.value);
/// if (css !== undefined) {
///   ctx.filter = css;
///   ctx.drawImage(image, 0, 0);
/// } else {
///   ctx.putImageData(toImageData(apply_filter(raster, 'vivid', slider.value)), 0, 0);
/// }
/// ```
#[wasm_bindgen]
pub fn css_filter(preset_name: &str, intensity: f32) -> Option<String> {
    css::to_css_filter(&compile_checked(preset_name, intensity))
}

/// Apply a preset to an image.
///
/// Takes an image and returns a new filtered image; the source is not
/// modified.
///
/// # Errors
/// Throws if the pixel buffer length is not `width * height * 4`.
///
/// # Example (TypeScript)
/// ```typescript
/// const data = ctx.getImageData(0, 0, w, h);
/// const out = apply_filter(new JsRaster(w, h, data.data), 'noir', 80);
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsRaster, preset_name: &str, intensity: f32) -> Result<JsRaster, JsValue> {
    let ops = compile_checked(preset_name, intensity);
    layerlab_core::render(&image.to_raster(), &ops)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply a `FilterSelection` to an image.
#[wasm_bindgen]
pub fn apply_selection(image: &JsRaster, selection: &FilterSelection) -> Result<JsRaster, JsValue> {
    let selection = selection.inner();
    apply_filter(image, &selection.preset, selection.intensity)
}

/// Render an operation list built by the caller.
///
/// Accepts the same `{ op, value }` objects `compile_filter` returns, so
/// callers can append a color overlay to a compiled preset before export.
///
/// # Errors
/// Throws if an operation object is malformed or the pixel buffer length
/// is not `width * height * 4`.
///
/// # Example (TypeScript)
/// ```typescript
/// const ops = [...compile_filter('vivid', 80), warmth_overlay(-0.2)];
/// const out = render_operations(raster, ops);
/// ```
#[wasm_bindgen]
pub fn render_operations(image: &JsRaster, ops: JsValue) -> Result<JsRaster, JsValue> {
    let ops: Vec<Operation> =
        serde_wasm_bindgen::from_value(ops).map_err(|e| JsValue::from_str(&e.to_string()))?;
    layerlab_core::render(&image.to_raster(), &ops)
        .map(JsRaster::from_raster)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Color overlay operation for a signed warmth value: orange when
/// positive, blue when negative, opacity `|warmth|`.
#[wasm_bindgen]
pub fn warmth_overlay(warmth: f32) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Operation::warmth_overlay(warmth))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compile, warning in the console when the preset is unknown.
fn compile_checked(preset_name: &str, intensity: f32) -> Vec<Operation> {
    if catalog::lookup(preset_name).is_err() {
        warn_unknown_preset(preset_name);
    }
    layerlab_core::compile(preset_name, intensity)
}

fn warn_unknown_preset(preset_name: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&format!(
        "Unknown filter preset '{}', using original",
        preset_name
    )));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = preset_name;
}
