//! Error types for pullpix-transform

use pullpix_core::{Coord, Dims};
use thiserror::Error;

/// Errors that can occur when building a transform description.
///
/// Validation happens eagerly, before any description is returned, so a
/// successful transform never yields malformed dimensions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pullpix_core::Error),

    /// Scale factor that is not finite and strictly positive
    #[error("invalid scale factor: ({0}, {1})")]
    InvalidScaleFactor(f64, f64),

    /// Sampling factor of zero
    #[error("invalid sampling factor: ({0}, {1})")]
    InvalidSamplingFactor(u32, u32),

    /// Side-by-side concatenation with unequal row counts
    #[error("row count mismatch: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    RowMismatch { left: Dims, right: Dims },

    /// Stacked concatenation with unequal column counts
    #[error("column count mismatch: {}x{} vs {}x{}", .top.0, .top.1, .bottom.0, .bottom.1)]
    ColumnMismatch { top: Dims, bottom: Dims },

    /// Crop region extending outside the source image
    #[error(
        "crop region out of bounds: origin ({}, {}) size {}x{} in {}x{} image",
        .origin.0, .origin.1, .size.0, .size.1, .image.0, .image.1
    )]
    CropOutOfBounds {
        origin: Coord,
        size: Dims,
        image: Dims,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
