//! Optional memoization of compiled sequences.
//!
//! Compilation is cheap and pure, so nothing in the engine caches on its
//! own. Callers that re-render the same selection many times (a slider
//! being dragged back and forth) can hold a `CompileCache` and decide when
//! to evict.

use std::collections::HashMap;
use std::sync::Arc;

use crate::compile::{clamp_intensity, compile};
use crate::operation::Operation;

/// Cache of compiled sequences keyed by (preset name, clamped intensity).
#[derive(Debug, Default)]
pub struct CompileCache {
    entries: HashMap<(String, u32), Arc<[Operation]>>,
}

impl CompileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached sequence, compiling and storing it on a miss.
    pub fn get_or_compile(&mut self, preset_name: &str, intensity: f32) -> Arc<[Operation]> {
        let intensity = clamp_intensity(intensity);
        // clamp_intensity folds -0.0 and NaN into +0.0, so bits are a canonical key
        let key = (preset_name.to_string(), intensity.to_bits());
        self.entries
            .entry(key)
            .or_insert_with(|| compile(preset_name, intensity).into())
            .clone()
    }

    /// Drop every entry for one preset. Returns how many were removed.
    pub fn evict_preset(&mut self, preset_name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(name, _), _| name != preset_name);
        let removed = before - self.entries.len();
        tracing::debug!(preset = preset_name, removed, "evicted compiled filters");
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
