//! Prime-field arithmetic primitives.
//!
//! Division mod p is multiplication by the modular inverse of the
//! denominator, obtained from the extended Euclidean algorithm. Everything
//! here is a pure function over `BigInt`; intermediate values stay in full
//! signed precision and are deliberately left unreduced so the interpolation
//! layer can normalize into [0, p) exactly once.
//!
//! # Design
//! - **Floor semantics**: quotients and remainders use floor division
//!   (`div_floor` / `mod_floor`), so Bezout coefficients for negative
//!   denominators come out bit-identical across implementations. Truncating
//!   division would flip the sign of the gcd for negative inputs and yield
//!   the negated inverse.
//! - **Explicit precondition**: a non-invertible denominator signals a
//!   non-prime modulus and surfaces as [`FieldError::NonInvertible`] rather
//!   than a silently wrong result.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Errors for field arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Denominator has no inverse mod p (gcd(den, p) != 1).
    ///
    /// Unreachable for a genuine prime p and a denominator that is nonzero
    /// mod p; hitting it means the modulus is misconfigured.
    NonInvertible,
}

/// Computes Bezout coefficients `(x, y)` with `a*x + b*y = gcd(a, b)`.
///
/// Iterative extended Euclidean algorithm with floor division. `b` is
/// conventionally the field prime (always positive); `a` may be negative.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let mut a = a.clone();
    let mut b = b.clone();
    let (mut x, mut last_x) = (BigInt::zero(), BigInt::one());
    let (mut y, mut last_y) = (BigInt::one(), BigInt::zero());

    while !b.is_zero() {
        let quotient = a.div_floor(&b);
        let r = a.mod_floor(&b);
        a = b;
        b = r;

        let next_x = &last_x - &quotient * &x;
        last_x = core::mem::replace(&mut x, next_x);

        let next_y = &last_y - &quotient * &y;
        last_y = core::mem::replace(&mut y, next_y);
    }

    (last_x, last_y)
}

/// Computes `num / den` mod `p` as `num * inv(den)`.
///
/// The return value `v` satisfies `(den * v).mod_floor(p) == num.mod_floor(p)`.
/// It is *not* reduced into [0, p): it may be negative or large, and callers
/// that need a canonical field element must normalize it themselves. The
/// interpolation in [`crate::shamir::reconstruct_secret`] does so once, at
/// the very end.
pub fn mod_divide(num: &BigInt, den: &BigInt, p: &BigInt) -> Result<BigInt, FieldError> {
    let (inv, _) = extended_gcd(den, p);
    if (den * &inv).mod_floor(p) != BigInt::one() {
        return Err(FieldError::NonInvertible);
    }
    Ok(num * inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_extended_gcd_identity() {
        let cases = [(3i64, 7i64), (10, 17), (-4, 17), (1612, 1613), (-1, 1613)];
        for (a, b) in cases {
            let (a, b) = (big(a), big(b));
            let (x, y) = extended_gcd(&a, &b);
            let g = a.gcd(&b);
            assert_eq!(&a * &x + &b * &y, g, "bezout failed for ({}, {})", a, b);
        }
    }

    #[test]
    fn test_mod_divide_contract() {
        let p = big(1613);
        // den * mod_divide(num, den, p) == num (mod p), including negative inputs
        for (num, den) in [(big(10), big(3)), (big(-2988), big(-1)), (big(5), big(1612))] {
            let v = mod_divide(&num, &den, &p).unwrap();
            assert_eq!((&den * &v).mod_floor(&p), num.mod_floor(&p));
        }
    }

    #[test]
    fn test_mod_divide_unreduced() {
        // The raw result is allowed to lie outside [0, p).
        let p = big(17);
        let v = mod_divide(&big(100), &big(3), &p).unwrap();
        assert_eq!((big(3) * &v).mod_floor(&p), big(100).mod_floor(&p));
    }

    #[test]
    fn test_non_invertible_denominator() {
        // 6 shares a factor with the composite modulus 15.
        let p = big(15);
        assert_eq!(mod_divide(&big(1), &big(6), &p), Err(FieldError::NonInvertible));
        // Zero denominator is never invertible.
        assert_eq!(
            mod_divide(&big(1), &BigInt::zero(), &big(17)),
            Err(FieldError::NonInvertible)
        );
    }

    #[test]
    fn test_negative_denominator_inverse() {
        // inv(-1) mod 1613 must be p - 1, not -1's truncating-division twin.
        let p = big(1613);
        let v = mod_divide(&big(1), &big(-1), &p).unwrap();
        assert_eq!(v.mod_floor(&p), big(1612));
    }
}
