// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line parser for the positioner console.
//!
//! Bytes are pushed one at a time as they arrive on the UART. A command is decoded when a line
//! terminator (`\n` or `\r`) arrives; blank lines are skipped.

use heapless::Vec;

use crate::config::LINE_CAPACITY;
use crate::protocol::messages::{Command, CommandError};

enum State {
    Collecting,
    /// The line overflowed the buffer; drop bytes until the next terminator.
    Discarding,
}

pub struct LineParser {
    state: State,
    buf: Vec<u8, LINE_CAPACITY>,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    pub fn new() -> Self {
        Self {
            state: State::Collecting,
            buf: Vec::new(),
        }
    }

    /// Process a single incoming byte. Returns `Some` once a non-blank line is complete.
    pub fn push(&mut self, byte: u8) -> Option<Result<Command, CommandError>> {
        let terminator = byte == b'\n' || byte == b'\r';

        match self.state {
            State::Collecting if terminator => {
                if self.buf.iter().all(u8::is_ascii_whitespace) {
                    self.buf.clear();
                    return None;
                }
                let result = match core::str::from_utf8(&self.buf) {
                    Ok(line) => parse_command(line),
                    Err(_) => Err(CommandError::Unparseable),
                };
                self.buf.clear();
                Some(result)
            }
            State::Collecting => {
                if self.buf.push(byte).is_err() {
                    self.buf.clear();
                    self.state = State::Discarding;
                }
                None
            }
            State::Discarding if terminator => {
                self.state = State::Collecting;
                Some(Err(CommandError::Unparseable))
            }
            State::Discarding => None,
        }
    }

    /// Drop any partially received line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.state = State::Collecting;
    }
}

/// Decode one command line.
///
/// - bare decimal: [`Command::Absolute`]
/// - `+` decimal: [`Command::Relative`] with a positive delta
/// - `-` decimal: [`Command::Relative`] with a negative delta
///
/// The number after an optional sign must start with a digit or `.`, which rules out doubled signs
/// and the `inf`/`nan` spellings `f32::from_str` would otherwise accept.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('+') {
        parse_magnitude(rest).map(Command::Relative)
    } else if let Some(rest) = line.strip_prefix('-') {
        parse_magnitude(rest).map(|delta| Command::Relative(-delta))
    } else {
        parse_magnitude(line).map(Command::Absolute)
    }
}

fn parse_magnitude(text: &str) -> Result<f32, CommandError> {
    let starts_numeric = text
        .bytes()
        .next()
        .is_some_and(|b| b.is_ascii_digit() || b == b'.');
    if !starts_numeric {
        return Err(CommandError::Unparseable);
    }

    let value: f32 = text.parse().map_err(|_| CommandError::Unparseable)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CommandError::Unparseable)
    }
}
