//! Layerlab WASM - WebAssembly bindings for the Layerlab filter engine
//!
//! This crate exposes layerlab-core to the browser editor.
//!
//! # Module Structure
//!
//! - `filters` - Preset catalog, compiler, CSS descriptors and rendering
//! - `preview` - Preset picker thumbnails
//! - `encode` - PNG/JPEG export
//! - `types` - WASM-compatible raster wrapper
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsRaster, apply_filter, css_filter } from '@layerlab/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, width, height);
//! const raster = new JsRaster(width, height, data.data);
//! const filtered = apply_filter(raster, 'dramatic', 75);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod filters;
mod preview;
mod types;

// Re-export public types
pub use encode::{encode_jpeg, encode_png};
pub use filters::{
    apply_filter, apply_selection, compile_filter, css_filter, list_presets, render_operations,
    warmth_overlay, FilterSelection,
};
pub use preview::{render_previews, JsPresetPreview};
pub use types::JsRaster;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
