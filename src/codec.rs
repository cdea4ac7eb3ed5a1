//! Text <-> integer codec.
//!
//! A collaborator of the sharing core, not part of it: the core only ever
//! sees the integer this codec produces. Encoding concatenates each
//! character's code point as decimal digits and records every code point's
//! digit count; decoding renders the integer back to decimal and slices it
//! by the recorded lengths, so the split is unambiguous even where the raw
//! digit stream would not reveal boundaries on its own.
//!
//! The digit-length list is the sole source of truth for boundaries. No
//! leading-zero stripping or length re-inference happens here; a digit
//! stream shorter than the recorded lengths is an error, and digits beyond
//! the last recorded length are ignored.
//!
//! The encoded integer grows with the text; the caller must pick a field
//! prime larger than it for the sharing round trip to be exact.

use num_bigint::BigInt;

/// Errors for text encoding and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Encoding input was empty; there is no integer to produce.
    EmptyText,
    /// The integer's digits ran out before the recorded lengths did.
    LengthMismatch,
    /// A digit slice did not name a valid Unicode scalar value.
    InvalidCodePoint,
}

/// Encodes `text` as a concatenated-code-point integer plus the digit count
/// of each code point.
pub fn encode(text: &str) -> Result<(BigInt, Vec<usize>), CodecError> {
    if text.is_empty() {
        return Err(CodecError::EmptyText);
    }

    let mut digits = String::new();
    let mut lengths = Vec::new();
    for c in text.chars() {
        let code = (c as u32).to_string();
        lengths.push(code.len());
        digits.push_str(&code);
    }

    // The first code point's decimal form never starts with '0', so the
    // concatenation parses back to exactly this digit string.
    let value: BigInt = digits.parse().map_err(|_| CodecError::EmptyText)?;
    Ok((value, lengths))
}

/// Decodes the integer produced by [`encode`] back to text using the
/// recorded digit lengths.
pub fn decode(value: &BigInt, lengths: &[usize]) -> Result<String, CodecError> {
    let digits = value.to_string();
    let mut rest = digits.as_str();

    let mut text = String::with_capacity(lengths.len());
    for &len in lengths {
        if rest.len() < len {
            return Err(CodecError::LengthMismatch);
        }
        let (head, tail) = rest.split_at(len);
        rest = tail;

        let code: u32 = head.parse().map_err(|_| CodecError::InvalidCodePoint)?;
        let c = char::from_u32(code).ok_or(CodecError::InvalidCodePoint)?;
        text.push(c);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SystemRandom;
    use crate::shamir::{reconstruct_secret, split_secret};
    use num_traits::One;

    #[test]
    fn test_encode_abc() {
        // 'a' = 97, 'b' = 98, 'c' = 99
        let (value, lengths) = encode("abc").unwrap();
        assert_eq!(value, BigInt::from(979899));
        assert_eq!(lengths, vec![2, 2, 2]);
    }

    #[test]
    fn test_round_trip() {
        for text in ["abc", "Ah ha", "A", "\n", "naïve", "日本"] {
            let (value, lengths) = encode(text).unwrap();
            assert_eq!(decode(&value, &lengths).unwrap(), text, "{:?}", text);
        }
    }

    #[test]
    fn test_mixed_digit_counts() {
        // 'A' = 65, 'h' = 104, ' ' = 32: lengths disambiguate the stream.
        let (value, lengths) = encode("Ah ha").unwrap();
        assert_eq!(value, BigInt::from(651043210497u64));
        assert_eq!(lengths, vec![2, 3, 2, 3, 2]);
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(encode(""), Err(CodecError::EmptyText));
    }

    #[test]
    fn test_length_mismatch() {
        // 123 has three digits; the lengths claim four.
        assert_eq!(
            decode(&BigInt::from(123), &[2, 2]),
            Err(CodecError::LengthMismatch)
        );
    }

    #[test]
    fn test_surrogate_code_point_rejected() {
        // 0xD800 = 55296 is not a Unicode scalar value.
        assert_eq!(
            decode(&BigInt::from(55296), &[5]),
            Err(CodecError::InvalidCodePoint)
        );
    }

    #[test]
    fn test_trailing_digits_ignored() {
        // Only the recorded lengths are consumed.
        let decoded = decode(&BigInt::from(9798), &[2]).unwrap();
        assert_eq!(decoded, "a");
    }

    #[test]
    fn test_text_sharing_round_trip() {
        // encode -> split -> reconstruct -> decode, over a prime that
        // exceeds the encoded integer (2^61 - 1, a Mersenne prime).
        let p = (BigInt::one() << 61) - BigInt::one();
        let mut rng = SystemRandom::new();

        let (secret, lengths) = encode("Ah ha").unwrap();
        assert!(secret < p);

        let shares = split_secret(&secret, 3, 6, &p, &mut rng).unwrap();
        let recovered = reconstruct_secret(&shares[2..5], &p).unwrap();
        assert_eq!(decode(&recovered, &lengths).unwrap(), "Ah ha");
    }
}
