//! Share generation.

use num_bigint::BigInt;

use super::{polynomial, share::Share, ShamirError};
use crate::random::RandomSource;

/// Splits `secret` into `n` shares, any `t` of which reconstruct it.
///
/// Builds a degree-(t-1) polynomial with `secret` as the constant term and
/// t - 1 coefficients drawn from `rng`, then evaluates it at x = 1..=n.
/// x = 0 is never used as a coordinate.
///
/// # Arguments
/// * `secret` - non-negative integer strictly less than `p`.
/// * `t` - threshold number of shares required for reconstruction.
/// * `n` - total number of shares to generate.
/// * `p` - the public field prime; must exceed the secret.
/// * `rng` - injected secure random source.
///
/// # Errors
/// * `InvalidThreshold` when t > n.
/// * `RandomFailure` when the source fails.
pub fn split_secret<R: RandomSource + ?Sized>(
    secret: &BigInt,
    t: usize,
    n: u32,
    p: &BigInt,
    rng: &mut R,
) -> Result<Vec<Share>, ShamirError> {
    if t > n as usize {
        return Err(ShamirError::InvalidThreshold);
    }

    log::debug!("splitting secret into {} shares (threshold {})", n, t);

    let coeffs = polynomial::sample_coefficients(secret, t, p, rng)?;

    let mut shares = Vec::with_capacity(n as usize);
    for x in 1..=n {
        let y = polynomial::evaluate(&coeffs, x, p);
        shares.push(Share::new(x, y)?);
    }
    Ok(shares)
}
