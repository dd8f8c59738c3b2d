//! Rectangular cropping

use crate::error::{TransformError, TransformResult};
use pullpix_core::{Coord, Dims, Image};

/// Crop a `size = (rows, cols)` region whose top-left corner is `origin`.
///
/// Output `(i, j)` reads source `(i + origin.0, j + origin.1)`; a zero-size
/// region is valid and yields an empty description.
///
/// # Errors
///
/// Returns [`TransformError::CropOutOfBounds`] when the requested region
/// extends outside the source image.
pub fn crop<P: Clone + Send + Sync + 'static>(
    image: &Image<P>,
    origin: Coord,
    size: Dims,
) -> TransformResult<Image<P>> {
    let (rows, cols) = image.dims();
    let fits = origin.0 as u64 + size.0 as u64 <= rows as u64
        && origin.1 as u64 + size.1 as u64 <= cols as u64;
    if !fits {
        return Err(TransformError::CropOutOfBounds {
            origin,
            size,
            image: image.dims(),
        });
    }
    let (oi, oj) = origin;
    Ok(image.remap(size, move |(i, j)| (i + oi, j + oj)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullpix_test::ramp8;

    #[test]
    fn test_crop_interior_region() {
        let img = ramp8(4, 4);
        let cropped = crop(&img, (1, 2), (2, 2)).unwrap();
        assert_eq!(cropped.dims(), (2, 2));
        let values: Vec<u8> = cropped.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, vec![6, 7, 10, 11]);
    }

    #[test]
    fn test_crop_full_image() {
        let img = ramp8(3, 5);
        let cropped = crop(&img, (0, 0), (3, 5)).unwrap();
        assert_eq!(cropped.to_vec(), img.to_vec());
    }

    #[test]
    fn test_crop_zero_size() {
        let img = ramp8(3, 3);
        let cropped = crop(&img, (3, 3), (0, 0)).unwrap();
        assert_eq!(cropped.dims(), (0, 0));
    }

    #[test]
    fn test_crop_out_of_bounds_is_rejected() {
        let img = ramp8(4, 4);
        let err = crop(&img, (2, 2), (3, 3)).unwrap_err();
        assert_eq!(
            err,
            TransformError::CropOutOfBounds {
                origin: (2, 2),
                size: (3, 3),
                image: (4, 4),
            }
        );
        assert!(crop(&img, (4, 0), (1, 1)).is_err());
        // Origin + size overflowing u32 must still be rejected, not wrap
        assert!(crop(&img, (1, 1), (u32::MAX, 1)).is_err());
    }
}
