use crate::core::Console;
use crate::utils::error::{InvertirError, Result};
use crate::utils::validation::check_input;

pub const PROMPT: &str = "Digite un numero (0 a 99.999): ";

/// Prompts until the user types a number in 0..=99999.
pub struct InputValidator<C: Console> {
    console: C,
}

impl<C: Console> InputValidator<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Returns the accepted line exactly as typed, leading zeros included.
    ///
    /// Rejected lines are answered with a diagnostic and a fresh prompt, with
    /// no attempt limit. Only a closed input or an I/O failure ends the loop
    /// without a value.
    pub fn pedir_numero(&mut self) -> Result<String> {
        loop {
            let raw = match self.console.prompt(PROMPT)? {
                Some(line) => line,
                None => {
                    tracing::warn!("Input closed while waiting for a number");
                    return Err(InvertirError::InputClosed);
                }
            };

            match check_input(&raw) {
                Ok(value) => {
                    tracing::debug!("Accepted {:?} (value {})", raw, value);
                    return Ok(raw);
                }
                Err(e) if e.is_input_error() => {
                    tracing::debug!("Rejected {:?}: {:?}", raw, e);
                    self.console.show(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    pub fn into_inner(self) -> C {
        self.console
    }
}
