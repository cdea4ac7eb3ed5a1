//! Shamir (t, n) threshold secret sharing over a prime field.
//!
//! A secret `s` with `0 <= s < p` is hidden as the constant term of a random
//! degree-(t-1) polynomial over GF(p). Evaluating the polynomial at
//! `x = 1..=n` yields `n` shares; any `t` of them recover `s` exactly via
//! Lagrange interpolation at `x = 0`, while `t - 1` reveal nothing.
//!
//! # Components
//! - [`field`]: modular inverse (extended Euclid) and exact division mod p.
//! - [`shamir`]: polynomial generation, share evaluation, reconstruction.
//! - [`random`]: the injected secure random source boundary.
//! - [`codec`]: text <-> integer encoding collaborator.
//!
//! # Security
//! - Coefficient randomness comes from a caller-injected [`random::RandomSource`];
//!   a weak or seeded source compromises the secrecy of the whole scheme.
//! - Share values and secrets are never logged; `Debug` on [`shamir::Share`]
//!   redacts the y-coordinate.
//! - All arithmetic is exact big-integer arithmetic. Intermediate values are
//!   signed and unbounded; reduction into [0, p) happens once, at the end of
//!   interpolation.
//!
//! # Caller obligations
//! The scheme cannot know the original threshold at reconstruction time.
//! Presenting fewer than `t` shares (but at least 2) produces a deterministic
//! value that is generally not the secret. Tracking and enforcing `t` is the
//! caller's job.

pub mod codec;
pub mod field;
pub mod random;
pub mod shamir;

pub use shamir::{
    mersenne_prime_31, reconstruct_secret, split_secret, SecretSharingScheme, ShamirError,
    ShamirPrimeField, Share,
};
