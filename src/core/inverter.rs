use crate::domain::model::InvertedNumber;

/// Reverses the decimal digits of a validated number.
#[derive(Debug, Clone)]
pub struct NumberInverter {
    digits: String,
}

impl NumberInverter {
    /// `validated` must be all ASCII digits, as returned by
    /// [`InputValidator::pedir_numero`](crate::core::validator::InputValidator::pedir_numero).
    pub fn new(validated: impl Into<String>) -> Self {
        Self {
            digits: validated.into(),
        }
    }

    pub fn invertir(&self) -> InvertedNumber {
        let reversed: String = self.digits.chars().rev().collect();
        InvertedNumber::from_digits(&reversed)
    }
}

impl From<u32> for NumberInverter {
    fn from(value: u32) -> Self {
        Self::new(value.to_string())
    }
}
