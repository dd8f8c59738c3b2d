//! The border-resolution capability
//!
//! When a sampling coordinate falls outside the image, the value is
//! produced by a *border policy*. This crate only consumes the capability;
//! it does not define the policy catalog. A policy receives the image
//! (dimensions plus in-bounds lookup) and the offending coordinate and
//! returns a pixel.

use crate::image::{Image, SignedCoord};
use std::sync::Arc;

/// Resolve a possibly out-of-range coordinate to a pixel.
///
/// [`Image::get_resolved`] answers in-range coordinates itself, so
/// implementations are only consulted for coordinates outside the image,
/// though the contract permits any coordinate.
pub trait BorderResolve<P> {
    /// Produce a pixel for `at`, which may lie outside `image`
    fn resolve(&self, image: &Image<P>, at: SignedCoord) -> P;
}

/// A shared border policy, cheap to capture inside image descriptions.
pub type Border<P> = Arc<dyn BorderResolve<P> + Send + Sync>;
