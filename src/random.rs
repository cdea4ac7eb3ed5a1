//! Random source boundary for polynomial coefficients.
//!
//! The scheme never talks to an RNG directly: it draws through the
//! [`RandomSource`] trait, injected by the caller. This keeps the only
//! mutable resource in the system external and substitutable, so tests can
//! run deterministically against a [`FixedSource`] while production uses the
//! OS CSPRNG via [`SystemRandom`].
//!
//! # Security
//! Coefficient randomness is security-critical: a weak or seeded source
//! compromises secrecy of the whole scheme, not just one share. Concurrent
//! splits must not share one source instance unless that source is itself
//! thread-safe.

use std::collections::VecDeque;

use num_bigint::{BigInt, RandBigInt};
use num_integer::Integer;
use num_traits::Zero;
use rand::rngs::OsRng;

/// Errors for random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// The underlying generator failed to produce output.
    SourceFailure,
    /// A fixed source ran out of queued values.
    Exhausted,
}

/// A source of uniform field elements.
pub trait RandomSource {
    /// Returns a unique identifier for the source.
    fn name(&self) -> &'static str;

    /// Draws a uniform integer in `[0, bound)`.
    fn uniform(&mut self, bound: &BigInt) -> Result<BigInt, RandomError>;
}

/// Production source backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for SystemRandom {
    fn name(&self) -> &'static str {
        "SystemRandom"
    }

    fn uniform(&mut self, bound: &BigInt) -> Result<BigInt, RandomError> {
        if bound <= &BigInt::zero() {
            return Err(RandomError::SourceFailure);
        }
        Ok(OsRng.gen_bigint_range(&BigInt::zero(), bound))
    }
}

/// Source that replays caller-queued values.
///
/// Each draw pops the next queued value, reduced into `[0, bound)`. Intended
/// for deterministic tests and known-answer vectors; never use it to split a
/// real secret.
pub struct FixedSource {
    queue: VecDeque<BigInt>,
}

impl FixedSource {
    /// Creates a source replaying `values` in order.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BigInt>,
    {
        Self {
            queue: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Queues additional values behind any remaining ones.
    pub fn push<V: Into<BigInt>>(&mut self, value: V) {
        self.queue.push_back(value.into());
    }
}

impl RandomSource for FixedSource {
    fn name(&self) -> &'static str {
        "FixedSource"
    }

    fn uniform(&mut self, bound: &BigInt) -> Result<BigInt, RandomError> {
        let v = self.queue.pop_front().ok_or(RandomError::Exhausted)?;
        Ok(v.mod_floor(bound))
    }
}
