//! pullpix-transform - Geometric transformations for pullpix
//!
//! This crate provides the transform catalog over pull-based image
//! descriptions:
//!
//! - Flips, transposition, and orthogonal rotations (exact index
//!   permutations)
//! - Arbitrary angle rotation (bounding-box expansion, half-pixel-centered
//!   sampling, pluggable interpolation)
//! - Resizing and scaling with center-aligned sampling
//! - Integer-factor up/down-sampling
//! - Cropping and concatenation
//!
//! Every transform returns a new [`pullpix_core::Image`] description; the
//! actual pixel iteration is left to an external materialization engine.

pub mod concat;
pub mod crop;
mod error;
pub mod interpolate;
pub mod rotate;
pub mod scale;

pub use concat::{left_to_right, top_to_bottom};
pub use crop::crop;
pub use error::{TransformError, TransformResult};
pub use interpolate::{Interpolation, interpolate};
pub use rotate::{
    flip_lr, flip_tb, rotate, rotate_90, rotate_180, rotate_270, rotate_orth, transpose,
};
pub use scale::{downsample, resize, scale, upsample};
