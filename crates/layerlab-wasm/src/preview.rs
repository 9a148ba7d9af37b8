//! Preset picker thumbnail WASM bindings.

use crate::types::JsRaster;
use layerlab_core::preview::{self, PresetPreview, DEFAULT_PREVIEW_SIZE};
use wasm_bindgen::prelude::*;

/// One picker thumbnail, rendered at full preset strength.
#[wasm_bindgen]
pub struct JsPresetPreview {
    name: String,
    label: String,
    css: Option<String>,
    image: JsRaster,
}

#[wasm_bindgen]
impl JsPresetPreview {
    /// Preset key
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Display label
    #[wasm_bindgen(getter)]
    pub fn label(&self) -> String {
        self.label.clone()
    }

    /// CSS filter equivalent, or undefined when the preset needs pixel rendering
    #[wasm_bindgen(getter)]
    pub fn css(&self) -> Option<String> {
        self.css.clone()
    }

    /// Rendered thumbnail (RGBA). Copies the pixel data.
    pub fn image(&self) -> JsRaster {
        JsRaster::new(self.image.width(), self.image.height(), self.image.pixels())
    }
}

impl From<PresetPreview> for JsPresetPreview {
    fn from(p: PresetPreview) -> Self {
        Self {
            name: p.name.to_string(),
            label: p.label.to_string(),
            css: p.css,
            image: JsRaster::from_raster(p.image),
        }
    }
}

/// Render one square thumbnail per preset, in display order.
///
/// # Arguments
/// * `image` - The current layer image
/// * `size` - Thumbnail edge in pixels; 0 uses the editor default (96)
///
/// # Example (TypeScript)
/// ```typescript
/// for (const preview of render_previews(layerRaster, 96)) {
///   drawThumbnail(preview.name, preview.image());
///   preview.free();
/// }
/// ```
#[wasm_bindgen]
pub fn render_previews(image: &JsRaster, size: u32) -> Result<Vec<JsPresetPreview>, JsValue> {
    previews(image, size).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn previews(
    image: &JsRaster,
    size: u32,
) -> Result<Vec<JsPresetPreview>, layerlab_core::FilterError> {
    let size = if size == 0 { DEFAULT_PREVIEW_SIZE } else { size };
    let previews = preview::render_previews(&image.to_raster(), size)?;
    Ok(previews.into_iter().map(JsPresetPreview::from).collect())
}
