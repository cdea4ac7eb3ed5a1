//! Shamir secret sharing over GF(p).
//!
//! # Components
//! - `share`: definition of a secret share (an (x, y) point).
//! - `polynomial`: coefficient sampling and Horner evaluation mod p.
//! - `split`: threshold logic and share generation.
//! - `reconstruct`: Lagrange interpolation at x = 0 for secret recovery.
//!
//! # Security
//! - Polynomial coefficients exist only for the duration of a split and are
//!   never returned to the caller; leaking them reveals the secret.
//! - Reconstruction is a pure function of its inputs; the only
//!   nondeterminism in the scheme is the injected random source used during
//!   splitting.

pub mod polynomial;
pub mod reconstruct;
pub mod share;
pub mod split;

use num_bigint::BigInt;
use num_traits::One;

use crate::random::RandomSource;

pub use reconstruct::reconstruct_secret;
pub use share::Share;
pub use split::split_secret;

/// Errors for secret sharing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShamirError {
    /// Share x-coordinate is zero (x = 0 would expose the secret directly).
    InvalidShareCoordinate,
    /// Threshold exceeds the share count (t > n); the secret would be
    /// unrecoverable by construction.
    InvalidThreshold,
    /// Fewer than 2 shares supplied to reconstruction.
    InsufficientShares,
    /// Two supplied shares have the same x-coordinate.
    DuplicateCoordinate,
    /// A Lagrange denominator was not invertible mod p. Signals a non-prime
    /// modulus; never produces a silently wrong secret.
    NonInvertibleDenominator,
    /// The random source failed to produce a coefficient.
    RandomFailure,
}

/// Trait for secret sharing schemes.
///
/// Abstract interface to support future extensions (other fields or
/// schemes).
pub trait SecretSharingScheme {
    type Share;
    type Secret;
    type Error;

    /// Splits a secret into n shares with threshold t.
    fn split<R: RandomSource + ?Sized>(
        &self,
        secret: &Self::Secret,
        t: usize,
        n: u32,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error>;

    /// Reconstructs a secret from shares.
    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}

/// Shamir's scheme over GF(p) for a caller-configured prime.
///
/// The prime is public and must exceed the largest possible secret; it stays
/// fixed for the lifetime of a sharing/reconstruction pair.
#[derive(Debug, Clone)]
pub struct ShamirPrimeField {
    prime: BigInt,
}

impl ShamirPrimeField {
    /// Creates a scheme over GF(`prime`).
    pub fn new(prime: BigInt) -> Self {
        Self { prime }
    }

    /// The configured field prime.
    pub fn prime(&self) -> &BigInt {
        &self.prime
    }
}

impl SecretSharingScheme for ShamirPrimeField {
    type Share = Share;
    type Secret = BigInt;
    type Error = ShamirError;

    fn split<R: RandomSource + ?Sized>(
        &self,
        secret: &Self::Secret,
        t: usize,
        n: u32,
        rng: &mut R,
    ) -> Result<Vec<Self::Share>, Self::Error> {
        split::split_secret(secret, t, n, &self.prime, rng)
    }

    fn reconstruct(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error> {
        reconstruct::reconstruct_secret(shares, &self.prime)
    }
}

/// The 8th Mersenne prime, 2^31 - 1.
///
/// The reference field modulus; large enough for secrets below ~2.1e9.
pub fn mersenne_prime_31() -> BigInt {
    (BigInt::one() << 31) - BigInt::one()
}
