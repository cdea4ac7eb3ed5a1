//! Secret reconstruction from shares.
//!
//! Lagrange interpolation of the supplied (x, y) points evaluated at x = 0
//! recovers the polynomial's constant term, i.e. the secret. Instead of
//! inverting each basis denominator independently, every term is multiplied
//! by the common denominator product D and a single division by D happens at
//! the end. Numerators and denominators are kept in full signed precision;
//! the result is reduced into [0, p) exactly once.
//!
//! The scheme cannot know the original threshold here. Any >= 2 points with
//! distinct x-coordinates interpolate to *some* value; with fewer than t of
//! the original shares that value is deterministic but generally not the
//! secret. Enforcing the threshold is the caller's obligation.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::{share::Share, ShamirError};
use crate::field::mod_divide;

/// Reconstructs the secret from shares by Lagrange interpolation at x = 0.
///
/// # Errors
/// * `InsufficientShares` when fewer than 2 shares are supplied.
/// * `DuplicateCoordinate` when two shares have the same x.
/// * `NonInvertibleDenominator` when a denominator has no inverse mod `p`
///   (only possible with a non-prime modulus).
pub fn reconstruct_secret(shares: &[Share], p: &BigInt) -> Result<BigInt, ShamirError> {
    if shares.len() < 2 {
        return Err(ShamirError::InsufficientShares);
    }

    // O(k^2) duplicate check; k is small.
    for i in 0..shares.len() {
        for j in (i + 1)..shares.len() {
            if shares[i].x == shares[j].x {
                return Err(ShamirError::DuplicateCoordinate);
            }
        }
    }

    log::debug!("reconstructing secret from {} shares", shares.len());

    let k = shares.len();
    let xs: Vec<BigInt> = shares.iter().map(|s| BigInt::from(s.x)).collect();

    // Per-point basis numerators and denominators at x = 0, unreduced.
    let mut nums = Vec::with_capacity(k);
    let mut dens = Vec::with_capacity(k);
    for i in 0..k {
        let mut num = BigInt::one();
        let mut den = BigInt::one();
        for j in 0..k {
            if i == j {
                continue;
            }
            num *= -&xs[j];
            den *= &xs[i] - &xs[j];
        }
        nums.push(num);
        dens.push(den);
    }

    // Multiply every term by the common denominator product D up front, then
    // divide by D once at the end.
    let den_product: BigInt = dens.iter().product();
    let mut sum = BigInt::zero();
    for i in 0..k {
        let term = (&nums[i] * &den_product * &shares[i].y).mod_floor(p);
        sum += mod_divide(&term, &dens[i], p)
            .map_err(|_| ShamirError::NonInvertibleDenominator)?;
    }

    let secret = mod_divide(&sum, &den_product, p)
        .map_err(|_| ShamirError::NonInvertibleDenominator)?;
    Ok((secret + p).mod_floor(p))
}
