use crate::utils::error::{InvertirError, Result};

/// Upper bound accepted by the prompt, inclusive.
pub const MAX_VALUE: u32 = 99_999;

pub fn validate_digits(raw: &str) -> Result<()> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvertirError::NonNumeric {
            input: raw.to_string(),
        });
    }
    Ok(())
}

/// Reads an all-digit string as a number no greater than `max`.
///
/// Leading zeros are skipped and the length is bounded before the digits
/// are accumulated, so inputs such as `"000000000000000000042"` never
/// overflow.
pub fn parse_bounded(digits: &str, max: u32) -> Result<u32> {
    let significant = digits.trim_start_matches('0');
    if significant.len() > max.to_string().len() {
        return Err(InvertirError::OutOfRange {
            value: digits.to_string(),
        });
    }

    let value = significant
        .bytes()
        .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));
    validate_max(digits, value, max)
}

pub fn validate_max(raw: &str, value: u64, max: u32) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| InvertirError::OutOfRange {
            value: raw.to_string(),
        })
}

/// Full check applied to each line typed at the prompt.
pub fn check_input(raw: &str) -> Result<u32> {
    validate_digits(raw)?;
    parse_bounded(raw, MAX_VALUE)
}
