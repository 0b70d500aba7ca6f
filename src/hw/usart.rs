// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! The console is both the command input and the operator log: commands are read byte by byte and
//! [`Reply`] lines are written back with CRLF endings through [`ConsolePort`].
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 9600
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt::{self, Write as _};
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Rx, Serial, Tx},
};

use crate::protocol::{ConsolePort, Reply};

pub struct Usart<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self { tx, rx }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }
}

impl<U: Instance> ConsolePort for Usart<U> {
    fn read_byte(&mut self) -> Option<u8> {
        // Receive errors (overrun, framing) drop the byte.
        match self.rx.read() {
            Ok(b) => Some(b),
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(_)) => None,
        }
    }

    fn write_reply(&mut self, reply: &Reply) {
        let _ = write!(self, "{reply}");
        self.write_str("\r\n");
    }

    #[inline]
    fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }

    fn drain(&mut self) {
        loop {
            match self.rx.read() {
                Ok(_) => {}
                Err(nb::Error::WouldBlock) => break,
                // Reading the status clears the error flag; keep going.
                Err(nb::Error::Other(_)) => {}
            }
        }
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Usart`.
impl<U: Instance> fmt::Write for Usart<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Usart::write_str(self, s);
        Ok(())
    }
}
