use crate::utils::error::Result;

/// Line-oriented conversation with the user.
pub trait Console {
    /// Shows `prompt` without a line break and reads one line.
    ///
    /// Returns `Ok(None)` once the input is exhausted. The line terminator
    /// is stripped from the returned text; nothing else is.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Shows a full line of output.
    fn show(&mut self, line: &str) -> Result<()>;
}

impl<C: Console + ?Sized> Console for &mut C {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).prompt(prompt)
    }

    fn show(&mut self, line: &str) -> Result<()> {
        (**self).show(line)
    }
}
