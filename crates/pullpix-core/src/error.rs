//! Error types for pullpix-core
//!
//! Provides a unified error type for operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// pullpix-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside the image bounds (strict indexing tier)
    #[error("coordinate out of bounds: ({row}, {col}) in {rows}x{cols} image")]
    OutOfBounds {
        row: u32,
        col: u32,
        rows: u32,
        cols: u32,
    },

    /// Invalid image dimensions
    #[error("invalid image dimensions: {rows}x{cols}")]
    InvalidDimension { rows: u32, cols: u32 },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
