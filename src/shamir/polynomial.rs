//! Polynomial construction and evaluation over GF(p).
//!
//! The secret polynomial has the secret as its constant term and t - 1
//! further coefficients drawn uniformly from [0, p) by the injected random
//! source. It exists only inside a split call and is dropped after share
//! evaluation.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

use super::ShamirError;
use crate::random::RandomSource;

/// Samples the coefficients [secret, r1, ..., r(t-1)] of a degree-(t-1)
/// polynomial with constant term `secret`.
pub(crate) fn sample_coefficients<R: RandomSource + ?Sized>(
    secret: &BigInt,
    t: usize,
    p: &BigInt,
    rng: &mut R,
) -> Result<Vec<BigInt>, ShamirError> {
    let mut coeffs = Vec::with_capacity(t.max(1));
    coeffs.push(secret.clone());
    for _ in 1..t {
        let r = rng.uniform(p).map_err(|_| ShamirError::RandomFailure)?;
        coeffs.push(r);
    }
    Ok(coeffs)
}

/// Evaluates the polynomial at `x` by Horner's method, reducing mod p after
/// every step.
///
/// Iterating from the highest-degree coefficient down to the constant term
/// with a per-step reduction keeps intermediate magnitudes below p * x and
/// the result bit-exact across implementations.
pub(crate) fn evaluate(coeffs: &[BigInt], x: u32, p: &BigInt) -> BigInt {
    let x = BigInt::from(x);
    let mut total = BigInt::zero();
    for coeff in coeffs.iter().rev() {
        total = (total * &x + coeff).mod_floor(p);
    }
    total
}
