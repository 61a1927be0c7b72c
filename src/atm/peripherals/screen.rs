use crate::Money;
use crate::Result;

use std::io::Write;

/// Output side of the terminal
pub trait Screen {
    fn display_message(&mut self, message: &str) -> Result;

    fn display_message_line(&mut self, message: &str) -> Result;

    fn display_dollar_amount(&mut self, amount: Money) -> Result;
}

/// Screen rendering to any writer, stdout in the binary
pub struct ConsoleScreen<W: Write> {
    output: W,
}

impl<W: Write> ConsoleScreen<W> {
    pub fn new(output: W) -> Self {
        return Self { output };
    }

    pub fn into_inner(self) -> W {
        self.output
    }
}

impl<W: Write> Screen for ConsoleScreen<W> {
    fn display_message(&mut self, message: &str) -> Result {
        write!(self.output, "{message}")?;
        // Prompts have no newline and must show before the keypad blocks
        self.output.flush()?;

        return Ok(());
    }

    fn display_message_line(&mut self, message: &str) -> Result {
        writeln!(self.output, "{message}")?;

        return Ok(());
    }

    fn display_dollar_amount(&mut self, amount: Money) -> Result {
        write!(self.output, "{amount}")?;
        self.output.flush()?;

        return Ok(());
    }
}
