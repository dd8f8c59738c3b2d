//! pullpix-test - Shared test utilities for pullpix
//!
//! Provides what the regression tests across the workspace need:
//!
//! - Deterministic test images ([`ramp8`], [`gray_from_fn`])
//! - Reference border policies ([`ClampBorder`], [`ConstBorder`]) - the
//!   production policy catalog lives outside the workspace, so tests carry
//!   their own minimal implementations of the capability
//! - Image comparison helpers ([`images_equal`], [`assert_images_eq`],
//!   [`max_abs_diff`])

use pullpix_core::{BorderResolve, Channel, Dims, Gray8, Image, Pixel, SignedCoord};

/// An 8-bit grayscale ramp: `v(i, j) = i * cols + j`, wrapping at 256.
pub fn ramp8(rows: u32, cols: u32) -> Image<Gray8> {
    Image::from_fn((rows, cols), move |(i, j)| Gray8::new([(i * cols + j) as u8]))
}

/// A grayscale image computed from a coordinate function.
pub fn gray_from_fn(dims: Dims, f: impl Fn(u32, u32) -> u8 + Send + Sync + 'static) -> Image<Gray8> {
    Image::from_fn(dims, move |(i, j)| Gray8::new([f(i, j)]))
}

/// Clamp-to-edge border policy: out-of-range coordinates read the nearest
/// edge pixel.
///
/// # Panics
///
/// Panics when resolving against an empty image, which has no edge pixel
/// to clamp to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClampBorder;

impl<P: Clone + Send + Sync + 'static> BorderResolve<P> for ClampBorder {
    fn resolve(&self, image: &Image<P>, at: SignedCoord) -> P {
        let (rows, cols) = image.dims();
        assert!(rows > 0 && cols > 0, "cannot clamp into an empty image");
        let row = at.0.clamp(0, rows as i64 - 1) as u32;
        let col = at.1.clamp(0, cols as i64 - 1) as u32;
        image.lookup((row, col))
    }
}

/// Constant-fill border policy: every out-of-range coordinate resolves to
/// a fixed pixel.
#[derive(Debug, Clone, Copy)]
pub struct ConstBorder<P>(pub P);

impl<P: Clone + Send + Sync + 'static> BorderResolve<P> for ConstBorder<P> {
    fn resolve(&self, _image: &Image<P>, _at: SignedCoord) -> P {
        self.0.clone()
    }
}

/// Compare two images for identical dimensions and content.
pub fn images_equal<P: Clone + PartialEq + Send + Sync + 'static>(
    a: &Image<P>,
    b: &Image<P>,
) -> bool {
    a.dims() == b.dims() && a.pixels().eq(b.pixels())
}

/// Assert two images have identical dimensions and content, reporting the
/// first mismatching coordinate on failure.
pub fn assert_images_eq<P: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static>(
    actual: &Image<P>,
    expected: &Image<P>,
) {
    assert_eq!(
        actual.dims(),
        expected.dims(),
        "image dimension mismatch: {:?} vs {:?}",
        actual.dims(),
        expected.dims()
    );
    let (rows, cols) = actual.dims();
    for i in 0..rows {
        for j in 0..cols {
            let a = actual.lookup((i, j));
            let e = expected.lookup((i, j));
            assert_eq!(a, e, "pixel mismatch at ({i}, {j}): {a:?} vs {e:?}");
        }
    }
}

/// Maximum absolute per-channel difference between two same-sized images.
///
/// The tolerance-comparison analog of exact equality, for interpolated
/// results that are only required to match within a bound.
pub fn max_abs_diff<C: Channel, const N: usize>(
    a: &Image<Pixel<C, N>>,
    b: &Image<Pixel<C, N>>,
) -> f64 {
    assert_eq!(a.dims(), b.dims(), "image dimension mismatch");
    let mut max = 0.0f64;
    for (pa, pb) in a.pixels().zip(b.pixels()) {
        for (ca, cb) in pa.promote().0.into_iter().zip(pb.promote().0) {
            max = max.max((ca - cb).abs());
        }
    }
    max
}
