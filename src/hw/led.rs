// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! User LEDs as positioner status indicators.
//!
//! - green: idle, ready for a command
//! - blue: a move is being executed
//! - red: the last command was rejected

use embedded_hal::digital::OutputPin;

use crate::control::MotionState;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self { pin, active };
        led.set(false);
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        let high = on == (self.active == ActiveLevel::High);
        if high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
    }
}

/// The three NUCLEO user LEDs wired up as status lights.
pub struct StatusLeds<G: OutputPin, B: OutputPin, R: OutputPin> {
    ready: Led<G>,
    busy: Led<B>,
    fault: Led<R>,
}

impl<G: OutputPin, B: OutputPin, R: OutputPin> StatusLeds<G, B, R> {
    pub fn new(green: G, blue: B, red: R) -> Self {
        Self {
            ready: Led::active_high(green),
            busy: Led::active_high(blue),
            fault: Led::active_high(red),
        }
    }

    /// Show whether the controller is accepting commands.
    pub fn show(&mut self, state: MotionState) {
        let moving = state == MotionState::Moving;
        self.busy.set(moving);
        self.ready.set(!moving);
    }

    /// Light red after a rejected command; cleared by the next accepted one.
    #[inline]
    pub fn fault(&mut self, rejected: bool) {
        self.fault.set(rejected);
    }
}
