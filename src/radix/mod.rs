//! Positional radix decoding.
//!
//! Share values arrive as digit strings in an arbitrary radix (binary,
//! octal, hexadecimal, base-36, ...). This module converts such strings
//! into exact [`BigInt`] values.
//!
//! The digit alphabet is `0`-`9` followed by `a`-`z` (case-insensitive),
//! covering digit values `0` through `35`, so the supported radix range
//! is `[2, 36]`.
//!
//! ## Validation
//!
//! Decoding is strict:
//!
//! - the digit string must be non-empty
//! - the base must lie within `[2, 36]`
//! - every character must belong to the digit alphabet
//! - every digit value must be strictly less than the base
//!
//! A permissive decoder would silently accept `"9"` in base 8 and
//! produce a value no polynomial ever evaluated to; since every decoded
//! value feeds exact reconstruction downstream, corrupted digits are
//! rejected at this boundary instead.
//!
//! No overflow is possible: accumulation is performed in arbitrary
//! precision from the first digit on.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced by [`decode`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RadixError {
    /// The digit string was empty.
    #[error("empty digit string")]
    EmptyDigits,

    /// The base lies outside the supported `[2, 36]` range.
    #[error("unsupported base {0}, expected 2..=36")]
    UnsupportedBase(u32),

    /// A character does not belong to the `0-9a-z` digit alphabet.
    #[error("invalid digit character {0:?}")]
    InvalidDigit(char),

    /// A digit's value is not representable in the given base.
    #[error("digit {digit:?} out of range for base {base}")]
    DigitOutOfRange { digit: char, base: u32 },
}

/// Decodes a digit string in the given base into an exact integer.
///
/// Characters are consumed left to right, most significant first, with
/// the usual positional accumulation:
///
/// ```text
/// acc = acc * base + digit
/// ```
///
/// Letters are accepted in either case: `decode("ff", 16)` and
/// `decode("FF", 16)` both yield 255.
///
/// # Errors
///
/// Returns a [`RadixError`] if the string is empty, the base is outside
/// `[2, 36]`, or any character is not a valid digit for the base.
pub fn decode(digits: &str, base: u32) -> Result<BigInt, RadixError> {
    if !(2..=36).contains(&base) {
        return Err(RadixError::UnsupportedBase(base));
    }

    if digits.is_empty() {
        return Err(RadixError::EmptyDigits);
    }

    let mut acc = BigInt::from(0u8);

    for c in digits.chars() {
        let value = digit_value(c)?;

        if value >= base {
            return Err(RadixError::DigitOutOfRange { digit: c, base });
        }

        acc = acc * base + value;
    }

    Ok(acc)
}

/// Maps a single character to its digit value in `0..=35`.
fn digit_value(c: char) -> Result<u32, RadixError> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'a'..='z' => Ok(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Ok(c as u32 - 'A' as u32 + 10),
        _ => Err(RadixError::InvalidDigit(c)),
    }
}
