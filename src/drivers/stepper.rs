// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Capability set the motion core needs from a stepper driver.

/// Rotation sense on the positioner circle.
///
/// `Positive` increases the reported angle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Direction that moves by a signed displacement. Zero maps to `Negative`; such a move has no
    /// steps, so the choice never reaches the pins.
    #[inline]
    pub fn of(displacement: f32) -> Self {
        if displacement > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        }
    }
}

/// A step/direction motor driver.
///
/// Implementations own whatever pins and timing source they need. None of these operations can
/// fail from the caller's point of view; a pulse once started always completes.
pub trait StepperDriver {
    /// One-time setup at boot: enable the power stage and select the micro-step mode.
    fn configure_driver(&mut self);

    /// Latch the rotation direction for the following pulses.
    fn set_direction(&mut self, direction: Direction);

    /// Emit one full STEP cycle (active, hold, inactive, hold). Blocks for the whole cycle.
    fn pulse_step(&mut self);
}

impl<T: StepperDriver + ?Sized> StepperDriver for &mut T {
    #[inline]
    fn configure_driver(&mut self) {
        (**self).configure_driver()
    }

    #[inline]
    fn set_direction(&mut self, direction: Direction) {
        (**self).set_direction(direction)
    }

    #[inline]
    fn pulse_step(&mut self) {
        (**self).pulse_step()
    }
}
