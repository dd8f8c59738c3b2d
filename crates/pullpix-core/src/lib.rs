//! pullpix-core - Data model for pull-based image transforms
//!
//! This crate provides the fundamental data structures used throughout the
//! pullpix library:
//!
//! - [`Image`] - the pull-based image description (dimensions + coordinate
//!   function); transforms compose descriptions, an external engine
//!   materializes them
//! - [`Pixel`] / [`Channel`] / [`RealPixel`] - the fixed-arity pixel model
//!   with real-valued promotion for blending
//! - [`BorderResolve`] / [`Border`] - the consumed out-of-bounds resolution
//!   capability (the policy catalog itself lives outside this crate)
//! - [`Error`] - core error type (strict indexing, dimension validation)

pub mod border;
pub mod error;
pub mod image;
pub mod pixel;

pub use border::{Border, BorderResolve};
pub use error::{Error, Result};
pub use image::{Coord, Dims, Image, SignedCoord};
pub use pixel::{Channel, Gray8, Gray16, GrayF32, Pixel, RealPixel, Rgb8, Rgba8};
