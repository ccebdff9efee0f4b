//! Blocking prompt primitives for the review loop.
//!
//! Parsing is a pure layer separated from the read loop: each parse function
//! returns a structured result and the loop re-prompts until it gets a valid
//! one. The loops are unbounded; only a closed input stream ends them early,
//! as an I/O error.

use std::fmt;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// Why a selection line was rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum SelectionError {
    Malformed(String),
    OutOfRange(usize),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::Malformed(token) => {
                write!(f, "You gave a malformed input! '{}' is not a numeric ID", token)
            }
            SelectionError::OutOfRange(index) => {
                write!(f, "{} is out of range for the listed items", index)
            }
        }
    }
}

/// Parse a selection line against `len` options: a single integer, or a
/// comma- or space-delimited list of integers, in user-given order.
pub fn parse_selection(input: &str, len: usize) -> Result<Vec<usize>, SelectionError> {
    let delimiter = if input.contains(',') { ',' } else { ' ' };
    let mut indices = Vec::new();
    for token in input.split(delimiter) {
        let token = token.trim();
        let index: usize = token
            .parse()
            .map_err(|_| SelectionError::Malformed(token.to_string()))?;
        if index >= len {
            return Err(SelectionError::OutOfRange(index));
        }
        indices.push(index);
    }
    Ok(indices)
}

/// What a confirmation line meant.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfirmAnswer {
    Yes,
    No,
    Default,
}

/// Parse a confirmation line: case-insensitive `y`/`n`, or empty for the
/// default. Anything else is a retry.
pub fn parse_confirmation(input: &str) -> Option<ConfirmAnswer> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(ConfirmAnswer::Yes),
        "n" => Some(ConfirmAnswer::No),
        "" => Some(ConfirmAnswer::Default),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The writer prompts share with the rest of the terminal output.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print the options with zero-based indices, then read selections until
    /// a line parses. Returns the chosen indices in user-given order.
    pub fn choose<S: AsRef<str>>(&mut self, options: &[S]) -> io::Result<Vec<usize>> {
        if options.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "nothing to choose from",
            ));
        }
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  [{}] {}", index, option.as_ref())?;
        }
        loop {
            write!(
                self.output,
                "Input the numeric ID or IDs of the item(s) you want: "
            )?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_selection(line.trim(), options.len()) {
                Ok(indices) => return Ok(indices),
                Err(rejected) => writeln!(self.output, "{}", rejected)?,
            }
        }
    }

    /// Like [`choose`](Self::choose) but keeps only the first selection.
    pub fn choose_one<S: AsRef<str>>(&mut self, options: &[S]) -> io::Result<usize> {
        loop {
            let selection = self.choose(options)?;
            if let Some(&first) = selection.first() {
                return Ok(first);
            }
        }
    }

    /// Ask a yes/no question; empty input means the default.
    pub fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        loop {
            write!(self.output, "{} ", message)?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_confirmation(&line) {
                Some(ConfirmAnswer::Yes) => return Ok(true),
                Some(ConfirmAnswer::No) => return Ok(false),
                Some(ConfirmAnswer::Default) => return Ok(default),
                None => writeln!(
                    self.output,
                    "Input was not y nor n. Enter is OK if you meant to use the default"
                )?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line)
    }
}
