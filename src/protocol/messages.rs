// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Console message set for the positioner.
//!
//! Host → board, one command per line:
//! - `123.4` absolute target angle
//! - `+5` / `-12.5` relative move from the current angle
//!
//! Board → host:
//! - `Positioning system` then a prompt on boot
//! - `Angle set: 123.4°` after an absolute move
//! - `New angle: 5.0°` after a relative move
//! - `Error! <reason>` when a command is rejected

use core::fmt;

#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::control::angle::{normalize, FULL_TURN_DEG};

pub const BANNER: &str = "Positioning system";
pub const PROMPT: &str = "Enter angle (0-359.9) or +/- delta (e.g. +45):";

const ANGLE_SET: &str = "Angle set: ";
const NEW_ANGLE: &str = "New angle: ";
const ERROR: &str = "Error! ";
const DEGREE_SIGN: char = '°';

/// One parsed command line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Go to this angle.
    Absolute(f32),
    /// Turn by this signed amount.
    Relative(f32),
}

/// Wire form, as the host sends it.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Absolute(angle) => write!(f, "{angle}"),
            Command::Relative(delta) if delta.is_sign_negative() => write!(f, "-{}", -delta),
            Command::Relative(delta) => write!(f, "+{delta}"),
        }
    }
}

/// Why a command never reached the motion core.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandError {
    /// Absolute angle outside the accepted domain.
    #[error("Enter 0-359.9")]
    OutOfRange,
    /// Line is not a plain or `+`/`-` prefixed decimal number.
    #[error("Not a number")]
    Unparseable,
    /// NaN or infinity handed to the command boundary.
    #[error("Non-finite value")]
    InvalidNumeric,
}

/// Normalized angle reached by a completed move.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FinalAngle(f32);

impl FinalAngle {
    pub fn new(angle_deg: f32) -> Self {
        Self(normalize(angle_deg))
    }

    #[inline]
    pub fn degrees(&self) -> f32 {
        self.0
    }

    /// Angle rounded to one decimal place for display. 359.96 reads as 0.0, not 360.0.
    pub fn rounded(&self) -> f32 {
        let tenths = (self.0 * 10.0).round() / 10.0;
        if tenths >= FULL_TURN_DEG {
            0.0
        } else {
            tenths
        }
    }
}

impl fmt::Display for FinalAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.rounded())
    }
}

/// A line written back to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reply {
    Banner,
    Prompt,
    /// Result of an absolute command.
    AngleSet(FinalAngle),
    /// Result of a relative command.
    NewAngle(FinalAngle),
    Rejected(CommandError),
}

impl Reply {
    /// Recognise a line received from the board. Unknown lines yield `None`.
    pub fn parse(line: &str) -> Option<Reply> {
        let line = line.trim();

        if line == BANNER {
            return Some(Reply::Banner);
        }
        if line == PROMPT {
            return Some(Reply::Prompt);
        }
        if let Some(rest) = line.strip_prefix(ANGLE_SET) {
            return parse_angle(rest).map(Reply::AngleSet);
        }
        if let Some(rest) = line.strip_prefix(NEW_ANGLE) {
            return parse_angle(rest).map(Reply::NewAngle);
        }
        if let Some(reason) = line.strip_prefix(ERROR) {
            let err = [
                CommandError::OutOfRange,
                CommandError::Unparseable,
                CommandError::InvalidNumeric,
            ]
            .into_iter()
            .find(|e| matches_reason(*e, reason))?;
            return Some(Reply::Rejected(err));
        }
        None
    }
}

fn parse_angle(text: &str) -> Option<FinalAngle> {
    let value: f32 = text.trim_end_matches(DEGREE_SIGN).trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(FinalAngle::new(value))
}

/// Compare an error's display text with `reason` without allocating.
fn matches_reason(err: CommandError, reason: &str) -> bool {
    struct Matcher<'a> {
        rest: &'a str,
        ok: bool,
    }

    impl fmt::Write for Matcher<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.rest.strip_prefix(s) {
                Some(rest) => self.rest = rest,
                None => self.ok = false,
            }
            Ok(())
        }
    }

    let mut m = Matcher {
        rest: reason,
        ok: true,
    };
    let _ = fmt::Write::write_fmt(&mut m, format_args!("{err}"));
    m.ok && m.rest.is_empty()
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Banner => f.write_str(BANNER),
            Reply::Prompt => f.write_str(PROMPT),
            Reply::AngleSet(angle) => write!(f, "{ANGLE_SET}{angle}{DEGREE_SIGN}"),
            Reply::NewAngle(angle) => write!(f, "{NEW_ANGLE}{angle}{DEGREE_SIGN}"),
            Reply::Rejected(err) => write!(f, "{ERROR}{err}"),
        }
    }
}
