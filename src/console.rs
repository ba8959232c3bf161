//! Line-oriented console I/O.
//!
//! Input is consumed as whitespace-separated tokens, so several answers may
//! share a line (`1 2` for a row and column) or be spread over many lines.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument, trace};

/// Shown when a number was expected but something else was typed.
pub const INVALID_NUMBER: &str = "Invalid input! Please enter a number.";

/// Console I/O failure.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConsoleError {
    /// The input stream ended while an answer was still expected.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {_0}")]
    Io(io::Error),
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Token reader and writer over arbitrary streams.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
    pending: VecDeque<String>,
}

impl<'a> Console<'a> {
    /// Creates a console over the given streams.
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
            pending: VecDeque::new(),
        }
    }

    /// Writes `text` as-is and flushes, so prompts appear before input is read.
    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `text` followed by a newline.
    pub fn write_line(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.write(text)?;
        self.write("\n")
    }

    /// Reads the next whitespace-separated token.
    #[instrument(skip(self))]
    pub fn read_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, "Token read");
                return Ok(token);
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input stream exhausted");
                return Err(ConsoleError::InputClosed);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Reads a single non-whitespace character.
    ///
    /// The rest of the token, if any, stays queued for the next read.
    pub fn read_char(&mut self) -> Result<char, ConsoleError> {
        let token = self.read_token()?;
        let mut chars = token.chars();
        // Tokens come from split_whitespace and are never empty.
        let first = chars.next().unwrap_or(' ');
        let rest = chars.as_str();
        if !rest.is_empty() {
            self.pending.push_front(rest.to_owned());
        }
        Ok(first)
    }

    /// Reads an integer.
    ///
    /// Returns `Ok(None)` when the token is not a number. The rest of the
    /// current line is discarded in that case so the caller can re-prompt
    /// from a clean slate.
    #[instrument(skip(self))]
    pub fn read_int(&mut self) -> Result<Option<i64>, ConsoleError> {
        let token = self.read_token()?;
        match token.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                debug!(%token, "Discarding malformed number");
                self.pending.clear();
                Ok(None)
            }
        }
    }

    /// Writes `prompt` and reads an integer, re-prompting on malformed input.
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        loop {
            self.write(prompt)?;
            if let Some(value) = self.read_int()? {
                return Ok(value);
            }
            self.write_line(INVALID_NUMBER)?;
        }
    }
}

impl Console<'static> {
    /// Console over the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl std::fmt::Debug for Console<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
