use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// [`Console`] over any buffered reader and writer.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        // Raw bytes: undecodable lines come back lossy and fail validation.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn show(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
