use num_bigint::BigInt;
use num_traits::One;
use unveil::radix::{RadixError, decode};

#[test]
fn decodes_binary() {
    assert_eq!(decode("10", 2).unwrap(), BigInt::from(2));
}

#[test]
fn decodes_hexadecimal() {
    assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
}

#[test]
fn letters_are_case_insensitive() {
    assert_eq!(decode("Z", 36).unwrap(), BigInt::from(35));
    assert_eq!(decode("FF", 16).unwrap(), decode("ff", 16).unwrap());
}

#[test]
fn leading_zeros_are_harmless() {
    assert_eq!(decode("007", 10).unwrap(), BigInt::from(7));
}

#[test]
fn exceeds_machine_word_widths() {
    // 40 hex digits of f: 2^160 - 1, far beyond u128.
    let digits = "f".repeat(40);
    let expected = (BigInt::one() << 160u32) - 1;

    assert_eq!(decode(&digits, 16).unwrap(), expected);
}

#[test]
fn rejects_empty_digits() {
    assert_eq!(decode("", 10), Err(RadixError::EmptyDigits));
}

#[test]
fn rejects_unsupported_bases() {
    assert_eq!(decode("1", 1), Err(RadixError::UnsupportedBase(1)));
    assert_eq!(decode("1", 37), Err(RadixError::UnsupportedBase(37)));
    assert_eq!(decode("1", 0), Err(RadixError::UnsupportedBase(0)));
}

#[test]
fn rejects_characters_outside_the_alphabet() {
    assert_eq!(decode("12!4", 10), Err(RadixError::InvalidDigit('!')));
    assert_eq!(decode("-5", 10), Err(RadixError::InvalidDigit('-')));
}

#[test]
fn rejects_digits_too_large_for_the_base() {
    assert_eq!(
        decode("9", 8),
        Err(RadixError::DigitOutOfRange { digit: '9', base: 8 })
    );
    assert_eq!(
        decode("1g", 16),
        Err(RadixError::DigitOutOfRange {
            digit: 'g',
            base: 16
        })
    );
}
