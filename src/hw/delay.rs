// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait delay on the Cortex-M SysTick, exposed as `embedded_hal::delay::DelayNs`.
//!
//! SysTick resolution is one microsecond here; nanosecond requests round up.

use cortex_m::delay::Delay;
use embedded_hal::delay::DelayNs;

pub struct SysDelay {
    delay: Delay,
}

impl SysDelay {
    /// Wrap a SysTick delay created with the core clock frequency.
    pub fn new(delay: Delay) -> Self {
        Self { delay }
    }
}

impl DelayNs for SysDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
