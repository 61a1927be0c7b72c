use std::collections::VecDeque;
use std::io::{self, BufRead};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeypadError {
    #[error("Keypad input is not a whole number: {0:?}")]
    Malformed(String),

    #[error("Keypad input exhausted")]
    Exhausted,

    #[error("Keypad read failed: {0}")]
    Io(#[from] io::Error),
}

/// Input side of the terminal. Every read yields one whole number.
pub trait Keypad {
    fn get_input(&mut self) -> Result<i64, KeypadError>;

    /// Reads one number, mapping malformed input to `None` so callers can re-prompt.
    /// Exhaustion and I/O failures still propagate.
    fn read_number(&mut self) -> crate::Result<Option<i64>> {
        match self.get_input() {
            Ok(value) => Ok(Some(value)),
            Err(KeypadError::Malformed(token)) => {
                log::warn!("Ignoring malformed keypad input: {token:?}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Keypad reading whitespace separated numbers from any buffered reader
pub struct ConsoleKeypad<R: BufRead> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> ConsoleKeypad<R> {
    pub fn new(input: R) -> Self {
        return Self {
            input,
            pending: VecDeque::new(),
        };
    }

    fn next_token(&mut self) -> Result<String, KeypadError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(KeypadError::Exhausted);
            }

            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

impl<R: BufRead> Keypad for ConsoleKeypad<R> {
    fn get_input(&mut self) -> Result<i64, KeypadError> {
        let token = self.next_token()?;

        return token.parse().map_err(|_| KeypadError::Malformed(token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    #[test]
    fn reads_one_number_per_call() {
        let mut keypad = ConsoleKeypad::new(Cursor::new("12345\n\n  54321 1\n-4\n"));

        assert_eq!(keypad.get_input().unwrap(), 12345);
        assert_eq!(keypad.get_input().unwrap(), 54321);
        assert_eq!(keypad.get_input().unwrap(), 1);
        assert_eq!(keypad.get_input().unwrap(), -4);
        assert!(matches!(keypad.get_input(), Err(KeypadError::Exhausted)));
    }

    #[test]
    fn malformed_token_is_consumed() {
        let mut keypad = ConsoleKeypad::new(Cursor::new("abc 7\n"));

        assert!(matches!(keypad.get_input(), Err(KeypadError::Malformed(token)) if token == "abc"));
        assert_eq!(keypad.get_input().unwrap(), 7);
    }

    #[test]
    fn read_number() {
        let mut keypad = ConsoleKeypad::new(Cursor::new("x1 42"));

        assert_eq!(keypad.read_number().unwrap(), None);
        assert_eq!(keypad.read_number().unwrap(), Some(42));

        let err = keypad.read_number().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KeypadError>(),
            Some(KeypadError::Exhausted)
        ));
    }
}
