//! Image concatenation
//!
//! Joins two images side by side or stacked, as a binary backward remap:
//! each output coordinate decides which source it reads. The sources must
//! agree on the shared axis.

use crate::error::{TransformError, TransformResult};
use pullpix_core::Image;

/// Concatenate two images side by side, `left` first.
///
/// Output dimensions are `(rows, left_cols + right_cols)`.
///
/// # Errors
///
/// Returns [`TransformError::RowMismatch`] when the row counts differ.
pub fn left_to_right<P: Clone + Send + Sync + 'static>(
    left: &Image<P>,
    right: &Image<P>,
) -> TransformResult<Image<P>> {
    if left.rows() != right.rows() {
        return Err(TransformError::RowMismatch {
            left: left.dims(),
            right: right.dims(),
        });
    }
    let split = left.cols();
    let out_dims = (left.rows(), left.cols() + right.cols());
    Ok(left.remap2_with(right, out_dims, move |l, r, (i, j)| {
        if j < split {
            l.lookup((i, j))
        } else {
            r.lookup((i, j - split))
        }
    }))
}

/// Concatenate two images vertically, `top` first.
///
/// Output dimensions are `(top_rows + bottom_rows, cols)`.
///
/// # Errors
///
/// Returns [`TransformError::ColumnMismatch`] when the column counts
/// differ.
pub fn top_to_bottom<P: Clone + Send + Sync + 'static>(
    top: &Image<P>,
    bottom: &Image<P>,
) -> TransformResult<Image<P>> {
    if top.cols() != bottom.cols() {
        return Err(TransformError::ColumnMismatch {
            top: top.dims(),
            bottom: bottom.dims(),
        });
    }
    let split = top.rows();
    let out_dims = (top.rows() + bottom.rows(), top.cols());
    Ok(top.remap2_with(bottom, out_dims, move |t, b, (i, j)| {
        if i < split {
            t.lookup((i, j))
        } else {
            b.lookup((i - split, j))
        }
    }))
}
