use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{RecoveryError, RecoveryResult};

/// Value of a single alphanumeric digit, case-insensitive: '0'..='9' are 0..=9,
/// 'a'..='z' are 10..=35.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'a'..='z' => Some(c as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decodes `digits` written in positional notation in `base` into a
/// non-negative big integer.
///
/// Bases above 36 are accepted, although no single digit can exceed 35.
/// An empty digit string is `MalformedInput`.
pub fn decode(digits: &str, base: u64) -> RecoveryResult<BigUint> {
    if base < 2 {
        return Err(RecoveryError::InvalidBase { base: base.into() });
    }
    if digits.is_empty() {
        return Err(RecoveryError::malformed("empty digit string"));
    }

    let mut acc = BigUint::zero();
    for (position, digit) in digits.chars().enumerate() {
        let value = digit_value(digit)
            .filter(|v| u64::from(*v) < base)
            .ok_or(RecoveryError::InvalidDigit {
                digit,
                position,
                base,
            })?;
        acc = acc * base + value;
    }
    Ok(acc)
}
