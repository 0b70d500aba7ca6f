// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Static configuration for the positioner.
//!
//! Board-level constants live here as `const`s; everything that shapes motion (step resolution,
//! pulse timing, input policy) is carried by [`PositionerConfig`] so it can be swapped in tests.

/// Console baud rate (matches the host application).
pub const BAUD_RATE: u32 = 9_600;

/// Receive buffer capacity for one command line, in bytes.
pub const LINE_CAPACITY: usize = 32;

/// Full-step angle of a standard 200 step/rev hybrid stepper, in degrees.
pub const FULL_STEP_DEG: f32 = 1.8;

/// Hold time for each STEP edge, in microseconds.
pub const PULSE_DELAY_US: u32 = 1_000;

/// Micro-step mode selected on the driver at startup.
///
/// Only MS1 is wired on the reference board, so only full and half step are reachable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepMode {
    /// MS1 low.
    Full,
    /// MS1 high.
    Half,
}

impl StepMode {
    /// Micro-steps per full step.
    #[inline]
    pub fn divisor(self) -> u8 {
        match self {
            StepMode::Full => 1,
            StepMode::Half => 2,
        }
    }

    /// Level of the MS1 select line for this mode.
    #[inline]
    pub fn ms1_high(self) -> bool {
        matches!(self, StepMode::Half)
    }
}

/// Which absolute angles the command boundary accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangePolicy {
    /// Accept exactly `[0, 360)`; anything else is `OutOfRange`.
    Strict,
    /// Accept any finite angle and wrap it onto the circle.
    Wrap,
}

/// Motion and input configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PositionerConfig {
    /// Full-step angle of the motor in degrees.
    pub full_step_deg: f32,
    /// Micro-step mode the driver is configured for.
    pub step_mode: StepMode,
    /// Hold time of each STEP edge in microseconds.
    pub pulse_delay_us: u32,
    /// Swap the DIR pin polarity (motor wired the other way round).
    pub invert_direction: bool,
    /// Accepted domain for absolute commands.
    pub range_policy: RangePolicy,
}

impl Default for PositionerConfig {
    fn default() -> Self {
        Self {
            full_step_deg: FULL_STEP_DEG,
            step_mode: StepMode::Half,
            pulse_delay_us: PULSE_DELAY_US,
            invert_direction: false,
            range_policy: RangePolicy::Strict,
        }
    }
}

impl PositionerConfig {
    /// Degrees of shaft rotation produced by one STEP pulse.
    #[inline]
    pub fn step_angle_deg(&self) -> f32 {
        self.full_step_deg / self.step_mode.divisor() as f32
    }

    pub fn with_step_mode(mut self, mode: StepMode) -> Self {
        self.step_mode = mode;
        self
    }

    pub fn with_full_step_deg(mut self, deg: f32) -> Self {
        self.full_step_deg = deg;
        self
    }

    pub fn with_pulse_delay_us(mut self, us: u32) -> Self {
        self.pulse_delay_us = us;
        self
    }

    pub fn with_inverted_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }
}
