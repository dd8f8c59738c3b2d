//! pullpix - Pull-based geometric image transforms
//!
//! Every transform in this library is a *description*: output dimensions
//! plus a pure function from an output coordinate to a pixel. Chained
//! transforms compose into a single description; a separate
//! materialization engine decides when and how (sequentially or in
//! parallel) pixels are actually computed.
//!
//! # Overview
//!
//! - Crop, flips, transposition, orthogonal rotations, up/down-sampling
//!   and concatenation as exact index permutations
//! - Arbitrary angle rotation and resizing through a pluggable
//!   interpolation strategy (nearest-neighbor, bilinear) with
//!   policy-based out-of-bounds resolution
//!
//! # Example
//!
//! ```
//! use pullpix::{Gray8, Image};
//! use pullpix::transform::{rotate_90, rotate_180};
//!
//! let img = Image::from_fn((4, 4), |(i, j)| Gray8::new([(i * 4 + j) as u8]));
//! let quarter = rotate_90(&img);
//! assert_eq!(quarter.dims(), (4, 4));
//! assert_eq!(quarter.lookup((0, 0)), img.lookup((3, 0)));
//!
//! // Descriptions compose without touching pixel storage
//! let half = rotate_180(&rotate_180(&img));
//! assert_eq!(half.lookup((1, 2)), img.lookup((1, 2)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pullpix_core::*;

// Re-export the transform catalog as a module
pub use pullpix_transform as transform;
