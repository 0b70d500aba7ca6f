// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Positioner Firmware
//!
//! This crate drives a bipolar stepper through a STEP/DIR driver to an absolute or relative angle
//! on the 0–360° circle, always taking the shorter way round. Commands arrive as text lines on the
//! debug USART of an STM32F767ZI (NUCLEO-F767ZI).
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around USART, GPIO and SysTick (feature `board`) |
//! | [`drivers`] | Device-level drivers (STEP/DIR stepper driver) |
//! | [`control`]   | Angle wraparound, shortest-path step generation, command validation |
//! | [`protocol`]   | Console command parsing and replies |
//! | [`config`]   | Motion and board configuration |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features board --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
#[cfg(feature = "board")]
pub mod hw;
pub mod protocol;

#[cfg(test)]
mod sim;

pub use config::PositionerConfig;
pub use control::{MotionController, Positioner};
