// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Operator console: bytes in, one reply per command line out.
//!
//! After every reply the receiver is drained and the partial line dropped, so whatever was typed
//! while the motor was turning never turns into a queued move.

use crate::protocol::messages::{Command, Reply};
use crate::protocol::parser::LineParser;

/// Serial link the console talks over.
pub trait ConsolePort {
    /// Take one received byte if there is one. Never blocks.
    fn read_byte(&mut self) -> Option<u8>;

    /// Write one reply line including its terminator.
    fn write_reply(&mut self, reply: &Reply);

    /// Block until everything written has left the transmitter.
    fn flush(&mut self);

    /// Discard everything currently waiting in the receiver.
    fn drain(&mut self);
}

pub struct Console<P> {
    port: P,
    parser: LineParser,
}

impl<P: ConsolePort> Console<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            parser: LineParser::new(),
        }
    }

    /// Boot greeting: banner, then the input prompt.
    pub fn greet(&mut self) {
        self.port.write_reply(&Reply::Banner);
        self.port.write_reply(&Reply::Prompt);
        self.port.flush();
    }

    /// Read at most one byte. When it completes a command line, run `handle` on the command, send
    /// the reply and drop pending input. Parse errors are answered without calling `handle`.
    pub fn poll<F>(&mut self, handle: F) -> Option<Reply>
    where
        F: FnOnce(Command) -> Reply,
    {
        let byte = self.port.read_byte()?;
        let reply = match self.parser.push(byte)? {
            Ok(command) => handle(command),
            Err(err) => Reply::Rejected(err),
        };

        self.port.write_reply(&reply);
        self.port.flush();
        self.port.drain();
        self.parser.reset();

        Some(reply)
    }
}
