//! Image scaling operations
//!
//! Provides:
//! - [`resize`] to a fixed target size with center-aligned interpolated
//!   sampling
//! - [`scale`] by per-axis factors (validated, then delegated to resize)
//! - [`downsample`] / [`upsample`] - exact integer-factor sampling with no
//!   interpolation

use crate::error::{TransformError, TransformResult};
use crate::interpolate::{Interpolation, interpolate};
use pullpix_core::{Border, Channel, Dims, Image, Pixel};

/// Resize an image to exactly `out_dims`.
///
/// Each output coordinate `(i, j)` samples the source at
/// `((i + 0.5) / fM - 0.5, (j + 0.5) / fN - 0.5)` where `fM`/`fN` are the
/// per-axis scale ratios. Aligning pixel centers this way avoids the edge
/// bias of corner-aligned mapping; positions that fall outside the source
/// (the first and last half-pixel) resolve through `border`.
pub fn resize<C: Channel, const N: usize>(
    image: &Image<Pixel<C, N>>,
    out_dims: Dims,
    method: Interpolation,
    border: Border<Pixel<C, N>>,
) -> Image<Pixel<C, N>> {
    let (rows, cols) = image.dims();
    let f_rows = out_dims.0 as f64 / rows as f64;
    let f_cols = out_dims.1 as f64 / cols as f64;
    let src = image.clone();
    Image::from_fn(out_dims, move |(i, j)| {
        let r = (i as f64 + 0.5) / f_rows - 0.5;
        let c = (j as f64 + 0.5) / f_cols - 0.5;
        interpolate(method, border.as_ref(), &src, (r, c))
    })
}

/// Scale an image by per-axis factors `(f_rows, f_cols)`.
///
/// Target dimensions are `(round(f_rows * m), round(f_cols * n))`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] before any sampling when
/// either factor is not finite and strictly positive.
pub fn scale<C: Channel, const N: usize>(
    image: &Image<Pixel<C, N>>,
    factors: (f64, f64),
    method: Interpolation,
    border: Border<Pixel<C, N>>,
) -> TransformResult<Image<Pixel<C, N>>> {
    let (f_rows, f_cols) = factors;
    if !(f_rows.is_finite() && f_cols.is_finite() && f_rows > 0.0 && f_cols > 0.0) {
        return Err(TransformError::InvalidScaleFactor(f_rows, f_cols));
    }
    let (rows, cols) = image.dims();
    let out_dims = (
        (f_rows * rows as f64).round() as u32,
        (f_cols * cols as f64).round() as u32,
    );
    Ok(resize(image, out_dims, method, border))
}

/// Keep every `factors.0`-th row and `factors.1`-th column.
///
/// Output dimensions are the integer quotients `(m / fm, n / fn)`; output
/// `(i, j)` reads source `(i * fm, j * fn)` exactly.
///
/// # Errors
///
/// Returns [`TransformError::InvalidSamplingFactor`] when either factor
/// is zero.
pub fn downsample<P: Clone + Send + Sync + 'static>(
    image: &Image<P>,
    factors: (u32, u32),
) -> TransformResult<Image<P>> {
    let (fm, fn_) = factors;
    if fm == 0 || fn_ == 0 {
        return Err(TransformError::InvalidSamplingFactor(fm, fn_));
    }
    let (rows, cols) = image.dims();
    Ok(image.remap((rows / fm, cols / fn_), move |(i, j)| (i * fm, j * fn_)))
}

/// Insert zeros between samples: the inverse lattice of [`downsample`].
///
/// Output dimensions are `(m * fm, n * fn)`; lattice coordinates (both
/// indices divisible by their factor) read the source, every other
/// coordinate yields the black fill pixel.
///
/// # Errors
///
/// Returns [`TransformError::InvalidSamplingFactor`] when either factor
/// is zero.
pub fn upsample<C: Channel, const N: usize>(
    image: &Image<Pixel<C, N>>,
    factors: (u32, u32),
) -> TransformResult<Image<Pixel<C, N>>> {
    let (fm, fn_) = factors;
    if fm == 0 || fn_ == 0 {
        return Err(TransformError::InvalidSamplingFactor(fm, fn_));
    }
    let (rows, cols) = image.dims();
    let out_dims = (rows * fm, cols * fn_);
    Ok(image.remap_with(out_dims, move |src, (i, j)| {
        if i % fm == 0 && j % fn_ == 0 {
            src.lookup((i / fm, j / fn_))
        } else {
            Pixel::black()
        }
    }))
}
