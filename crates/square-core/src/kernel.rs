//! The f32 square kernel and the f64/f32 marshalling around it.
//!
//! Host runtimes box real numbers as binary64. The kernel works in binary32,
//! so values crossing the boundary are narrowed on the way in and widened on
//! the way out. Squaring never happens in the wider type: rounding must match
//! a plain `float * float`.

/// Square a binary32 value: `x * x` in f32 precision.
///
/// Follows IEEE-754 multiplication with no special casing: infinities square
/// to `+inf`, NaN stays NaN, and products past `f32::MAX` overflow to `+inf`.
///
/// # Example
///
/// ```
/// assert_eq!(square_core::square(-5.0), 25.0);
/// ```
#[inline]
pub fn square(x: f32) -> f32 {
    x * x
}

/// Narrow a host double to binary32 (round to nearest, ties to even).
///
/// Finite values beyond the f32 range become infinities.
#[inline]
pub fn narrow(value: f64) -> f32 {
    value as f32
}

/// Widen a binary32 result back into a host double. Exact.
#[inline]
pub fn widen(value: f32) -> f64 {
    f64::from(value)
}

/// The full boundary computation: narrow, square, widen.
#[inline]
pub fn square_boxed(value: f64) -> f64 {
    widen(square(narrow(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_simple_values() {
        assert_eq!(square(2.0), 4.0);
        assert_eq!(square(0.0), 0.0);
        assert_eq!(square(-5.0), 25.0);
        assert_eq!(square(3.0), 9.0);
        assert_eq!(square(-3.0), 9.0);
    }

    #[test]
    fn negative_zero_squares_to_positive_zero() {
        let result = square(-0.0);
        assert_eq!(result, 0.0);
        assert!(result.is_sign_positive());
    }

    #[test]
    fn infinities_square_to_positive_infinity() {
        assert_eq!(square(f32::INFINITY), f32::INFINITY);
        assert_eq!(square(f32::NEG_INFINITY), f32::INFINITY);
    }

    #[test]
    fn nan_stays_nan() {
        let result = square(f32::NAN);
        assert!(result.is_nan());
        assert_ne!(result, result);
    }

    #[test]
    fn overflow_goes_to_infinity() {
        assert_eq!(square(f32::MAX), f32::INFINITY);
        assert_eq!(square(-f32::MAX), f32::INFINITY);
    }

    #[test]
    fn subnormal_underflows_to_zero() {
        assert_eq!(square(f32::MIN_POSITIVE), 0.0);
    }

    #[test]
    fn narrow_saturates_to_infinity() {
        assert_eq!(narrow(1e39), f32::INFINITY);
        assert_eq!(narrow(-1e39), f32::NEG_INFINITY);
        assert!(narrow(f64::NAN).is_nan());
    }

    #[test]
    fn boxed_square_uses_f32_precision() {
        let expected = f64::from(0.1f32 * 0.1f32);
        assert_eq!(square_boxed(0.1), expected);
        assert_ne!(square_boxed(0.1), 0.1 * 0.1);
    }

    #[test]
    fn boxed_square_overflows_after_narrowing() {
        // 1e20 fits in f32 but its square does not
        assert_eq!(square_boxed(1e20), f64::INFINITY);
        assert_eq!(square_boxed(1e39), f64::INFINITY);
    }

    #[test]
    fn widen_is_exact() {
        let x = 0.1f32;
        assert_eq!(narrow(widen(x)), x);
    }
}
