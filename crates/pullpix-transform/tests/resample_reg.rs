//! Resampling and catalog regression tests
//!
//! Covers resize round trips, the sampling lattice, crop validation, and
//! concatenation reconstruction.

use pullpix_core::{Gray8, Image};
use pullpix_test::{ClampBorder, assert_images_eq, gray_from_fn, max_abs_diff, ramp8};
use pullpix_transform::{
    Interpolation, TransformError, crop, downsample, left_to_right, resize, scale, top_to_bottom,
    upsample,
};
use rand::RngExt;
use std::sync::Arc;

fn random_gray(rows: u32, cols: u32) -> Image<Gray8> {
    let mut rng = rand::rng();
    let data: Vec<u8> = (0..(rows * cols) as usize).map(|_| rng.random()).collect();
    gray_from_fn((rows, cols), move |i, j| data[(i * cols + j) as usize])
}

// ============================================================================
// Resize / scale
// ============================================================================

#[test]
fn test_nearest_resize_round_trip() {
    let img = ramp8(4, 4);
    let up = resize(&img, (8, 8), Interpolation::Nearest, Arc::new(ClampBorder));
    let back = resize(&up, (4, 4), Interpolation::Nearest, Arc::new(ClampBorder));
    assert_images_eq(&back, &img);
}

#[test]
fn test_nearest_resize_round_trip_random() {
    let img = random_gray(7, 5);
    let up = resize(&img, (14, 10), Interpolation::Nearest, Arc::new(ClampBorder));
    let back = resize(&up, (7, 5), Interpolation::Nearest, Arc::new(ClampBorder));
    assert_images_eq(&back, &img);
}

#[test]
fn test_bilinear_resize_identity_dims_is_exact() {
    let img = random_gray(6, 9);
    let same = resize(&img, (6, 9), Interpolation::Bilinear, Arc::new(ClampBorder));
    assert_images_eq(&same, &img);
}

#[test]
fn test_bilinear_upscale_stays_within_value_range() {
    let img = random_gray(5, 5);
    let up = resize(&img, (13, 11), Interpolation::Bilinear, Arc::new(ClampBorder));
    // A convex blend of source values can never leave their range
    let lo = img.pixels().map(|p| p.0[0]).min().unwrap() as f64;
    let hi = img.pixels().map(|p| p.0[0]).max().unwrap() as f64;
    assert!(up.pixels().all(|p| (lo..=hi).contains(&(p.0[0] as f64))));
}

#[test]
fn test_scale_matches_resize_to_rounded_dims() {
    let img = ramp8(4, 6);
    let scaled = scale(
        &img,
        (1.5, 1.5),
        Interpolation::Bilinear,
        Arc::new(ClampBorder),
    )
    .unwrap();
    let resized = resize(&img, (6, 9), Interpolation::Bilinear, Arc::new(ClampBorder));
    assert_eq!(scaled.dims(), (6, 9));
    assert_eq!(max_abs_diff(&scaled, &resized), 0.0);
}

#[test]
fn test_invalid_scale_factor_fails_before_sampling() {
    // The source panics if it is ever sampled; validation must reject the
    // factor first.
    let img: Image<Gray8> = Image::from_fn((4, 4), |_| panic!("source was sampled"));
    let err = scale(
        &img,
        (-1.0, 1.0),
        Interpolation::Bilinear,
        Arc::new(ClampBorder),
    )
    .unwrap_err();
    assert_eq!(err, TransformError::InvalidScaleFactor(-1.0, 1.0));
}

// ============================================================================
// Sampling lattice
// ============================================================================

#[test]
fn test_row_downsample_then_upsample_on_ramp() {
    // 4x4 with v(i,j) = i*4+j: even output rows reproduce the original
    // rows, odd rows are the zero fill.
    let img = ramp8(4, 4);
    let down = downsample(&img, (2, 1)).unwrap();
    assert_eq!(down.dims(), (2, 4));
    let up = upsample(&down, (2, 1)).unwrap();
    assert_eq!(up.dims(), (4, 4));
    let values: Vec<u8> = up.pixels().map(|p| p.0[0]).collect();
    assert_eq!(
        values,
        vec![0, 1, 2, 3, 0, 0, 0, 0, 8, 9, 10, 11, 0, 0, 0, 0]
    );
}

#[test]
fn test_upsample_then_downsample_is_identity() {
    let img = random_gray(5, 6);
    let up = upsample(&img, (3, 2)).unwrap();
    let back = downsample(&up, (3, 2)).unwrap();
    assert_images_eq(&back, &img);
}

// ============================================================================
// Crop and concatenation
// ============================================================================

#[test]
fn test_split_and_rejoin_columns() {
    let img = random_gray(6, 8);
    let left = crop(&img, (0, 0), (6, 4)).unwrap();
    let right = crop(&img, (0, 4), (6, 4)).unwrap();
    assert_images_eq(&left_to_right(&left, &right).unwrap(), &img);
}

#[test]
fn test_split_and_rejoin_rows() {
    let img = random_gray(8, 5);
    let top = crop(&img, (0, 0), (4, 5)).unwrap();
    let bottom = crop(&img, (4, 0), (4, 5)).unwrap();
    assert_images_eq(&top_to_bottom(&top, &bottom).unwrap(), &img);
}

#[test]
fn test_crop_region_must_fit() {
    let img = ramp8(4, 4);
    assert!(crop(&img, (0, 0), (4, 4)).is_ok());
    assert!(matches!(
        crop(&img, (0, 1), (4, 4)),
        Err(TransformError::CropOutOfBounds { .. })
    ));
    assert!(matches!(
        crop(&img, (5, 0), (1, 1)),
        Err(TransformError::CropOutOfBounds { .. })
    ));
}

#[test]
fn test_concat_dimension_mismatch_reports_both_dims() {
    let a = ramp8(3, 4);
    let b = ramp8(2, 4);
    match left_to_right(&a, &b) {
        Err(TransformError::RowMismatch { left, right }) => {
            assert_eq!(left, (3, 4));
            assert_eq!(right, (2, 4));
        }
        other => panic!("expected RowMismatch, got {other:?}"),
    }
}
