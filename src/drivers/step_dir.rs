// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Generic STEP/DIR stepper driver (A4988, DRV8825 and friends).
//!
//! Wiring on the reference board:
//! - STEP: one rising edge per micro-step
//! - DIR: high = positive rotation (unless inverted in the configuration)
//! - ENABLE: active-low power-stage enable
//! - MS1: micro-step select (MS2/MS3 not connected, so full or half step only)
//!
//! Pulse timing is taken from an injected [`DelayNs`], so the pulse train can be exercised against a
//! simulated clock.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{PositionerConfig, StepMode};
use crate::drivers::stepper::{Direction, StepperDriver};

/// STEP/DIR driver bound to its four control lines and a delay source.
pub struct StepDir<STEP, DIR, EN, MS1, D> {
    step: STEP,
    dir: DIR,
    enable: EN,
    ms1: MS1,
    delay: D,

    step_mode: StepMode,
    pulse_delay_us: u32,
    invert_direction: bool,
}

impl<STEP, DIR, EN, MS1, D> StepDir<STEP, DIR, EN, MS1, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    MS1: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the control lines. STEP idles low and the power stage stays disabled until
    /// [`StepperDriver::configure_driver`] runs.
    pub fn new(
        mut step: STEP,
        dir: DIR,
        mut enable: EN,
        ms1: MS1,
        delay: D,
        config: &PositionerConfig,
    ) -> Self {
        step.set_low().ok();
        enable.set_high().ok();

        Self {
            step,
            dir,
            enable,
            ms1,
            delay,
            step_mode: config.step_mode,
            pulse_delay_us: config.pulse_delay_us,
            invert_direction: config.invert_direction,
        }
    }
}

impl<STEP, DIR, EN, MS1, D> StepperDriver for StepDir<STEP, DIR, EN, MS1, D>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    MS1: OutputPin,
    D: DelayNs,
{
    fn configure_driver(&mut self) {
        if self.step_mode.ms1_high() {
            self.ms1.set_high().ok();
        } else {
            self.ms1.set_low().ok();
        }
        self.enable.set_low().ok();
    }

    fn set_direction(&mut self, direction: Direction) {
        let high = (direction == Direction::Positive) != self.invert_direction;
        if high {
            self.dir.set_high().ok();
        } else {
            self.dir.set_low().ok();
        }
    }

    fn pulse_step(&mut self) {
        self.step.set_high().ok();
        self.delay.delay_us(self.pulse_delay_us);
        self.step.set_low().ok();
        self.delay.delay_us(self.pulse_delay_us);
    }
}
