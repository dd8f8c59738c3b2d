//! The pull-based image description
//!
//! An [`Image`] is not a pixel buffer. It is a *description*: output
//! dimensions plus a pure function from an output coordinate to a pixel.
//! Transforms compose these descriptions without touching storage; a
//! separate materialization engine (external to this workspace) iterates
//! the description, fusing chained transforms before any pixel is computed.
//!
//! # Coordinate convention
//!
//! Coordinates are `(row, col)` pairs, zero-based, row-major. Dimensions
//! are `(rows, cols)`.
//!
//! # Ownership model
//!
//! `Image` wraps its coordinate function in an `Arc`, so cloning is cheap
//! and descriptions capture their sources by clone. `Image<P>` is
//! `Send + Sync` whenever `P` is, which leaves the materializer free to
//! evaluate distinct output pixels in parallel.
//!
//! # Indexing tiers
//!
//! Four caller-selectable strictness levels are provided on top of the raw
//! coordinate function:
//!
//! - [`Image::get`] - strict, fails on out-of-range
//! - [`Image::try_get`] - optional, `None` on out-of-range
//! - [`Image::get_or`] - substitutes a default on out-of-range
//! - [`Image::get_resolved`] - delegates out-of-range to a border policy
//!
//! Interpolation always uses the border-resolved tier.

use crate::border::BorderResolve;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Image dimensions as `(rows, cols)`
pub type Dims = (u32, u32);

/// An in-range coordinate as `(row, col)`
pub type Coord = (u32, u32);

/// A possibly out-of-range coordinate as `(row, col)`.
///
/// Produced by interpolation neighbor selection and nearest-coordinate
/// rounding; resolved through a border policy.
pub type SignedCoord = (i64, i64);

/// A pull-based image: dimensions plus a coordinate function.
pub struct Image<P> {
    dims: Dims,
    sample: Arc<dyn Fn(Coord) -> P + Send + Sync>,
}

impl<P> Clone for Image<P> {
    fn clone(&self) -> Self {
        Image {
            dims: self.dims,
            sample: Arc::clone(&self.sample),
        }
    }
}

impl<P> std::fmt::Debug for Image<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("rows", &self.dims.0)
            .field("cols", &self.dims.1)
            .finish_non_exhaustive()
    }
}

impl<P: Clone + Send + Sync + 'static> Image<P> {
    /// Construct an image from a coordinate function.
    ///
    /// The function is only ever called with coordinates inside `dims`.
    ///
    /// # Example
    ///
    /// ```
    /// use pullpix_core::{Gray8, Image};
    ///
    /// let ramp = Image::from_fn((4, 4), |(i, j)| Gray8::new([(i * 4 + j) as u8]));
    /// assert_eq!(ramp.lookup((2, 3)), Gray8::new([11]));
    /// ```
    pub fn from_fn(dims: Dims, f: impl Fn(Coord) -> P + Send + Sync + 'static) -> Self {
        Image {
            dims,
            sample: Arc::new(f),
        }
    }

    /// Construct a uniform image.
    pub fn constant(dims: Dims, value: P) -> Self {
        Image::from_fn(dims, move |_| value.clone())
    }

    /// Image dimensions as `(rows, cols)`
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> u32 {
        self.dims.0
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> u32 {
        self.dims.1
    }

    /// Evaluate the coordinate function directly, without bounds checking.
    ///
    /// The caller must guarantee `coord` lies inside [`Image::dims`]; the
    /// behavior of the underlying function is unspecified outside them.
    #[inline]
    pub fn lookup(&self, coord: Coord) -> P {
        (self.sample)(coord)
    }

    /// Strict lookup: fails on an out-of-range coordinate.
    pub fn get(&self, coord: Coord) -> Result<P> {
        let (rows, cols) = self.dims;
        if coord.0 < rows && coord.1 < cols {
            Ok(self.lookup(coord))
        } else {
            Err(Error::OutOfBounds {
                row: coord.0,
                col: coord.1,
                rows,
                cols,
            })
        }
    }

    /// Optional lookup: `None` on an out-of-range coordinate.
    pub fn try_get(&self, coord: Coord) -> Option<P> {
        let (rows, cols) = self.dims;
        (coord.0 < rows && coord.1 < cols).then(|| self.lookup(coord))
    }

    /// Default-substitution lookup: out-of-range coordinates yield
    /// `default`.
    pub fn get_or(&self, at: SignedCoord, default: P) -> P {
        match self.in_bounds(at) {
            Some(coord) => self.lookup(coord),
            None => default,
        }
    }

    /// Border-resolved lookup: in-range coordinates are answered directly,
    /// out-of-range coordinates are delegated to `border`.
    pub fn get_resolved(&self, border: &dyn BorderResolve<P>, at: SignedCoord) -> P {
        match self.in_bounds(at) {
            Some(coord) => self.lookup(coord),
            None => border.resolve(self, at),
        }
    }

    #[inline]
    fn in_bounds(&self, at: SignedCoord) -> Option<Coord> {
        let (rows, cols) = self.dims;
        (at.0 >= 0 && at.1 >= 0 && at.0 < rows as i64 && at.1 < cols as i64)
            .then(|| (at.0 as u32, at.1 as u32))
    }

    /// Backward remap: build a new description whose coordinate `c` reads
    /// this image at `map(c)`.
    ///
    /// This is the backpermute primitive every exact-index transform is
    /// built on. `map` must return in-range source coordinates.
    pub fn remap(&self, out_dims: Dims, map: impl Fn(Coord) -> Coord + Send + Sync + 'static) -> Image<P> {
        let src = self.clone();
        Image::from_fn(out_dims, move |c| src.lookup(map(c)))
    }

    /// Construct-by-remap with full access to the source image.
    ///
    /// Unlike [`Image::remap`] the function computes the output pixel
    /// itself, so it can blend several source lookups or substitute a
    /// fill value.
    pub fn remap_with(
        &self,
        out_dims: Dims,
        f: impl Fn(&Image<P>, Coord) -> P + Send + Sync + 'static,
    ) -> Image<P> {
        let src = self.clone();
        Image::from_fn(out_dims, move |c| f(&src, c))
    }

    /// Binary construct-by-remap over two source images.
    pub fn remap2_with(
        &self,
        other: &Image<P>,
        out_dims: Dims,
        f: impl Fn(&Image<P>, &Image<P>, Coord) -> P + Send + Sync + 'static,
    ) -> Image<P> {
        let a = self.clone();
        let b = other.clone();
        Image::from_fn(out_dims, move |c| f(&a, &b, c))
    }

    /// Row-major iterator over every pixel of the description.
    ///
    /// This is the minimal materialization surface; the core itself never
    /// iterates an image.
    pub fn pixels(&self) -> impl Iterator<Item = P> + '_ {
        let (rows, cols) = self.dims;
        (0..rows).flat_map(move |r| (0..cols).map(move |c| self.lookup((r, c))))
    }

    /// Evaluate the whole description into a row-major vector.
    pub fn to_vec(&self) -> Vec<P> {
        self.pixels().collect()
    }
}
