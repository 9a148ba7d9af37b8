//! Error types for the filter engine.

use thiserror::Error;

/// Errors produced by catalog lookup, rendering and preview generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// No preset with this name exists in the catalog.
    ///
    /// The compiler recovers from this by falling back to the identity
    /// transform; it only surfaces from direct catalog lookups.
    #[error("Unknown filter preset: {0}")]
    NotFound(String),

    /// The pixel buffer does not match `width * height * 4`, or a requested
    /// output size is zero.
    #[error("Invalid dimensions: {width}x{height} does not match {len} RGBA bytes")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    /// The `image` crate rejected a buffer conversion.
    #[error("Image buffer error: {0}")]
    Image(String),
}
