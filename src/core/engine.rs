use crate::core::inverter::NumberInverter;
use crate::core::validator::InputValidator;
use crate::core::Console;
use crate::domain::model::InvertedNumber;
use crate::utils::error::Result;

pub struct InversionEngine<C: Console> {
    console: C,
}

impl<C: Console> InversionEngine<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Reads one valid number, prints its reversal and returns it.
    pub fn run(&mut self) -> Result<InvertedNumber> {
        let num = InputValidator::new(&mut self.console).pedir_numero()?;
        let inverted = NumberInverter::new(num.as_str()).invertir();
        tracing::info!("Inverted {} into {}", num, inverted);

        self.console
            .show(&format!("Numero invertido: {}", inverted))?;
        Ok(inverted)
    }

    pub fn into_inner(self) -> C {
        self.console
    }
}
