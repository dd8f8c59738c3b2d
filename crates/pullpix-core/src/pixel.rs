//! Pixel and channel numeric model
//!
//! A [`Pixel`] is a fixed-arity vector of channel values. Channels may be
//! integral (`u8`, `u16`, `u32`) or floating (`f32`, `f64`); all blending
//! arithmetic is defined over a real-valued promotion ([`RealPixel`]) and
//! converted back to the native channel representation by rounding, not
//! truncation.
//!
//! # Promotion contract
//!
//! `C::from_real(x.to_real()) == x` for every channel value `x`, so a blend
//! with zero fractional weight reproduces its source pixel bit-exactly.

use std::ops::{Add, Mul, Sub};

/// A numeric channel representation.
///
/// Integral implementations round to the nearest value (ties away from
/// zero) and saturate to the channel range on conversion from a real;
/// floating implementations convert directly.
pub trait Channel: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// The zero (black) channel value
    const ZERO: Self;

    /// Promote to a real number for blending
    fn to_real(self) -> f64;

    /// Convert a real number back to the native representation
    fn from_real(value: f64) -> Self;
}

impl Channel for u8 {
    const ZERO: Self = 0;

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value.round().clamp(0.0, u8::MAX as f64) as u8
    }
}

impl Channel for u16 {
    const ZERO: Self = 0;

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value.round().clamp(0.0, u16::MAX as f64) as u16
    }
}

impl Channel for u32 {
    const ZERO: Self = 0;

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value.round().clamp(0.0, u32::MAX as f64) as u32
    }
}

impl Channel for f32 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_real(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value as f32
    }
}

impl Channel for f64 {
    const ZERO: Self = 0.0;

    #[inline]
    fn to_real(self) -> f64 {
        self
    }

    #[inline]
    fn from_real(value: f64) -> Self {
        value
    }
}

/// A pixel: a fixed-arity vector of channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel<C: Channel, const N: usize>(pub [C; N]);

/// 8-bit grayscale pixel
pub type Gray8 = Pixel<u8, 1>;
/// 16-bit grayscale pixel
pub type Gray16 = Pixel<u16, 1>;
/// 32-bit floating grayscale pixel
pub type GrayF32 = Pixel<f32, 1>;
/// 8-bit RGB pixel
pub type Rgb8 = Pixel<u8, 3>;
/// 8-bit RGBA pixel
pub type Rgba8 = Pixel<u8, 4>;

impl<C: Channel, const N: usize> Pixel<C, N> {
    /// Create a pixel from its channel values.
    ///
    /// The named pixel types are aliases, which cannot be called as
    /// tuple-struct constructors; they build through this function
    /// instead: `Gray8::new([v])`.
    #[inline]
    pub const fn new(channels: [C; N]) -> Self {
        Pixel(channels)
    }

    /// Create a pixel with every channel set to `value`
    #[inline]
    pub fn splat(value: C) -> Self {
        Pixel([value; N])
    }

    /// The all-zero (black) pixel, used as the fill value for
    /// zero-insertion upsampling
    #[inline]
    pub fn black() -> Self {
        Pixel([C::ZERO; N])
    }

    /// Channel values
    #[inline]
    pub fn channels(&self) -> &[C; N] {
        &self.0
    }

    /// Apply a function to every channel
    #[inline]
    pub fn map<D: Channel>(self, f: impl Fn(C) -> D) -> Pixel<D, N> {
        Pixel(self.0.map(f))
    }

    /// Promote to the real-valued representation used for blending
    #[inline]
    pub fn promote(self) -> RealPixel<N> {
        RealPixel(self.0.map(Channel::to_real))
    }

    /// Round a real-valued pixel back to the native representation
    #[inline]
    pub fn from_real(real: RealPixel<N>) -> Self {
        Pixel(real.0.map(C::from_real))
    }
}

impl<C: Channel, const N: usize> Add for Pixel<C, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_real(self.promote() + rhs.promote())
    }
}

impl<C: Channel, const N: usize> Sub for Pixel<C, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_real(self.promote() - rhs.promote())
    }
}

impl<C: Channel, const N: usize> Mul<f64> for Pixel<C, N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_real(self.promote() * rhs)
    }
}

/// The real-valued promotion of a pixel.
///
/// Blending happens entirely in this representation so that a chain of
/// arithmetic rounds exactly once, at the final conversion back to the
/// native channel type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealPixel<const N: usize>(pub [f64; N]);

impl<const N: usize> Add for RealPixel<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        RealPixel(out)
    }
}

impl<const N: usize> Sub for RealPixel<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o -= r;
        }
        RealPixel(out)
    }
}

impl<const N: usize> Mul<f64> for RealPixel<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        RealPixel(self.0.map(|v| v * rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_constructs_through_aliases() {
        assert_eq!(Gray8::new([5]).channels(), &[5]);
        assert_eq!(Rgb8::new([1, 2, 3]), Pixel::new([1u8, 2, 3]));
        assert_eq!(GrayF32::new([0.5]).promote(), RealPixel([0.5]));
        const WHITE: Gray8 = Gray8::new([255]);
        assert_eq!(WHITE, Gray8::splat(255));
    }

    #[test]
    fn test_from_real_rounds_to_nearest() {
        assert_eq!(u8::from_real(1.4), 1);
        assert_eq!(u8::from_real(1.5), 2);
        assert_eq!(u8::from_real(2.5), 3);
        assert_eq!(u16::from_real(0.49), 0);
    }

    #[test]
    fn test_from_real_saturates() {
        assert_eq!(u8::from_real(300.0), 255);
        assert_eq!(u8::from_real(-3.0), 0);
        assert_eq!(u16::from_real(1e9), u16::MAX);
    }

    #[test]
    fn test_promotion_round_trip() {
        for v in [0u8, 1, 127, 128, 255] {
            assert_eq!(u8::from_real(v.to_real()), v);
        }
        for v in [0.0f32, 0.25, -1.5, 1e6] {
            assert_eq!(f32::from_real(v.to_real()), v);
        }
    }

    #[test]
    fn test_pixel_arithmetic() {
        let a = Rgb8::new([10, 20, 30]);
        let b = Rgb8::new([1, 2, 3]);
        assert_eq!(a + b, Rgb8::new([11, 22, 33]));
        assert_eq!(a - b, Rgb8::new([9, 18, 27]));
        assert_eq!(b * 2.5, Rgb8::new([3, 5, 8]));
    }

    #[test]
    fn test_pixel_sub_saturates_at_zero() {
        let a = Gray8::new([5]);
        let b = Gray8::new([9]);
        assert_eq!(a - b, Gray8::new([0]));
    }

    #[test]
    fn test_black_and_map() {
        assert_eq!(Rgba8::black(), Rgba8::new([0, 0, 0, 0]));
        let p = Gray8::new([200]);
        assert_eq!(p.map(|c| c as u16 * 2), Gray16::new([400]));
    }

    #[test]
    fn test_real_pixel_lerp_is_exact_at_zero_weight() {
        let f00 = Gray8::new([37]).promote();
        let f10 = Gray8::new([201]).promote();
        let blended = f00 + (f10 - f00) * 0.0;
        assert_eq!(Gray8::from_real(blended), Gray8::new([37]));
    }
}
