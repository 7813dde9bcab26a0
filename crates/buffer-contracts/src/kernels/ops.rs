//! Shared pure helpers: total Euclidean division and remainder.
//!
//! Lowered array code divides and takes remainders with arbitrary,
//! possibly zero, divisors; `hdiv`/`hmod` are the total variants that
//! define the zero-divisor case as 0 instead of trapping. For non-zero
//! divisors they agree with `i32::div_euclid` / `i32::rem_euclid`.

/// Euclidean quotient, total: `hdiv(x, 0) == 0`.
#[inline]
#[must_use]
pub fn hdiv(x: i32, y: i32) -> i32 {
    if y == 0 {
        0
    } else {
        x.div_euclid(y)
    }
}

/// Euclidean remainder, total: `hmod(x, 0) == 0`.
///
/// For `y != 0` the result lies in `[0, |y|)` regardless of the sign of
/// `x`.
#[inline]
#[must_use]
pub fn hmod(x: i32, y: i32) -> i32 {
    if y == 0 {
        0
    } else {
        x.rem_euclid(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hdiv_hmod_zero_divisor() {
        assert_eq!(hdiv(17, 0), 0);
        assert_eq!(hmod(17, 0), 0);
        assert_eq!(hdiv(-17, 0), 0);
        assert_eq!(hmod(-17, 0), 0);
    }

    #[test]
    fn hmod_negative_numerator() {
        assert_eq!(hmod(-7, 5), 3);
        assert_eq!(hdiv(-7, 5), -2);
        assert_eq!(hmod(-7, -5), 3);
        assert_eq!(hdiv(-7, -5), 2);
    }

    proptest! {
        /// Division identity: x == y * hdiv(x, y) + hmod(x, y) for y != 0.
        #[test]
        fn division_identity(x in -10_000i32..10_000, y in -100i32..100) {
            prop_assume!(y != 0);
            prop_assert_eq!(x, y * hdiv(x, y) + hmod(x, y));
        }

        /// Remainder range: 0 <= hmod(x, y) < |y| for y != 0.
        #[test]
        fn remainder_range(x in -10_000i32..10_000, y in -100i32..100) {
            prop_assume!(y != 0);
            let r = hmod(x, y);
            prop_assert!(r >= 0 && r < y.abs());
        }
    }
}
