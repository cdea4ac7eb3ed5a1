//! Secret share definition.
//!
//! A share is a point (x, y) on the polynomial hiding the secret:
//! - x: a nonzero coordinate unique to each holder. Public information.
//! - y: the polynomial evaluated at x, mod p. Highly sensitive.
//!
//! Shares are independent and order-insensitive; any subset of size >= t
//! suffices for reconstruction. The scheme keeps no copy after generation.
//!
//! # Security
//! The `Debug` implementation redacts the y-coordinate.

use core::fmt;

use num_bigint::BigInt;

use super::ShamirError;

/// A share of a secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Share {
    /// The x-coordinate (1..=n). Never zero: the polynomial at x = 0 *is*
    /// the secret.
    pub x: u32,
    /// The y-coordinate, a field element in [0, p).
    pub y: BigInt,
}

impl fmt::Debug for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Share")
            .field("x", &self.x)
            .field("y", &"***SENSITIVE***")
            .finish()
    }
}

impl Share {
    /// Creates a new share, rejecting the forbidden coordinate x = 0.
    pub fn new(x: u32, y: BigInt) -> Result<Self, ShamirError> {
        if x == 0 {
            return Err(ShamirError::InvalidShareCoordinate);
        }
        Ok(Self { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_creation() {
        let s = Share::new(1, BigInt::from(1494)).unwrap();
        assert_eq!(s.x, 1);
        assert_eq!(s.y, BigInt::from(1494));
    }

    #[test]
    fn test_zero_coordinate_rejected() {
        assert_eq!(
            Share::new(0, BigInt::from(7)),
            Err(ShamirError::InvalidShareCoordinate)
        );
    }

    #[test]
    fn test_debug_redaction() {
        let s = Share::new(5, BigInt::from(123456789)).unwrap();
        let debug_str = format!("{:?}", s);
        assert!(debug_str.contains("x: 5"));
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("123456789"));
    }
}
