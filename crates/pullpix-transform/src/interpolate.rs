//! Interpolation strategies
//!
//! Transforms that do not land on exact integer coordinates sample the
//! source at a real-valued `(row, col)` position through one of the
//! methods here. Neighbor pixels that fall outside the image are resolved
//! through the border capability rather than failing, so a single
//! interpolation call never errors.
//!
//! Blending is performed on the real-valued promotion of the pixel and
//! rounded back to the native channel representation exactly once.

use pullpix_core::{BorderResolve, Channel, Image, Pixel};

/// Interpolation method for real-valued sampling positions.
///
/// A closed variant set: adding a method means adding an arm to the
/// dispatch in [`interpolate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest-neighbor: fastest, exact source-pixel reproduction, no
    /// blending
    Nearest,
    /// Bilinear blend of the four surrounding pixels
    #[default]
    Bilinear,
}

/// Sample `image` at the real-valued position `at = (row, col)`.
///
/// Out-of-range neighbors (including the rounded position itself for
/// [`Interpolation::Nearest`]) resolve through `border`.
///
/// Exact-coordinate guarantee: when `at` is an integer coordinate, both
/// methods reproduce `image.lookup(at)` bit-exactly, for floating and
/// integral channel representations alike.
pub fn interpolate<C: Channel, const N: usize>(
    method: Interpolation,
    border: &dyn BorderResolve<Pixel<C, N>>,
    image: &Image<Pixel<C, N>>,
    at: (f64, f64),
) -> Pixel<C, N> {
    match method {
        Interpolation::Nearest => {
            // Ties round away from zero, matching standard rounding
            let coord = (at.0.round() as i64, at.1.round() as i64);
            image.get_resolved(border, coord)
        }
        Interpolation::Bilinear => bilinear(border, image, at),
    }
}

/// Bilinear blend: rows first, then columns.
fn bilinear<C: Channel, const N: usize>(
    border: &dyn BorderResolve<Pixel<C, N>>,
    image: &Image<Pixel<C, N>>,
    (r, c): (f64, f64),
) -> Pixel<C, N> {
    let r0 = r.floor();
    let c0 = c.floor();
    // Both fractions lie in [0, 1)
    let rfrac = r - r0;
    let cfrac = c - c0;
    let (i0, j0) = (r0 as i64, c0 as i64);

    let f00 = image.get_resolved(border, (i0, j0)).promote();
    let f10 = image.get_resolved(border, (i0 + 1, j0)).promote();
    let f01 = image.get_resolved(border, (i0, j0 + 1)).promote();
    let f11 = image.get_resolved(border, (i0 + 1, j0 + 1)).promote();

    let fi0 = f00 + (f10 - f00) * rfrac;
    let fi1 = f01 + (f11 - f01) * rfrac;
    Pixel::from_real(fi0 + (fi1 - fi0) * cfrac)
}
