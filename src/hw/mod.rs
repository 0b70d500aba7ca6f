// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board support for the NUCLEO-F767ZI.

pub mod delay;
pub mod gpio;
pub mod led;
pub mod pins;
pub mod usart;

pub use delay::SysDelay;
pub use gpio::OutputLine;
pub use led::{Led, StatusLeds};
pub use pins::BoardPins;
pub use usart::Usart;
