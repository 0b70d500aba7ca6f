// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod console;
pub mod messages;
pub mod parser;

pub use console::{Console, ConsolePort};
pub use messages::{Command, CommandError, FinalAngle, Reply};
pub use parser::{parse_command, LineParser};
