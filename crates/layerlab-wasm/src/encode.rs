//! Image encoding WASM bindings.
//!
//! Exposes PNG and JPEG export of filtered rasters.
//!
//! # Example
//!
//! ```typescript
//! import { apply_filter, encode_png } from '@layerlab/wasm';
//!
//! const filtered = apply_filter(raster, 'vivid', 80);
//! const png = encode_png(filtered);
//! await writable.write(new Blob([png], { type: 'image/png' }));
//! ```

use crate::types::JsRaster;
use layerlab_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a raster to PNG bytes, keeping alpha.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(image: &JsRaster) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_raster()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a raster to JPEG bytes. Alpha is dropped.
///
/// # Arguments
///
/// * `image` - The filtered raster
/// * `quality` - JPEG quality (1-100, recommended: 90)
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsRaster, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_raster(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
