use std::fmt;

/// Digit-reversed form of a validated number.
///
/// Held as normalized decimal digits: no leading zeros, `"0"` for zero.
/// Validated text may carry any number of leading zeros, and those become
/// trailing zeros here, so the value is not bounded by a machine integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvertedNumber {
    digits: String,
}

impl InvertedNumber {
    pub(crate) fn from_digits(digits: &str) -> Self {
        let significant = digits.trim_start_matches('0');
        let digits = if significant.is_empty() {
            "0".to_string()
        } else {
            significant.to_string()
        };
        Self { digits }
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// The value as `u64`, or `None` when it does not fit.
    pub fn as_u64(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

impl fmt::Display for InvertedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl PartialEq<u64> for InvertedNumber {
    fn eq(&self, other: &u64) -> bool {
        self.as_u64() == Some(*other)
    }
}
