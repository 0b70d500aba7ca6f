// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the NUCLEO-F767ZI with a STEP/DIR driver on the Arduino header.
//!
//! | Signal | Arduino | MCU |
//! | ------ | ------- | --- |
//! | MS1 | D7 | PF13 |
//! | ENABLE | D8 | PF12 |
//! | STEP | D9 | PD15 |
//! | DIR | D10 | PD14 |

use stm32f7xx_hal::{
    gpio::{gpiod, Alternate, PinState},
    pac,
    prelude::*,
};

use crate::hw::OutputLine;

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOB, dp.GPIOD, dp.GPIOF);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart3: Usart3Pins,
    pub stepper: StepperPins,
}

pub struct LedPins {
    pub green: OutputLine<'B', 0>, // LD1
    pub blue: OutputLine<'B', 7>,  // LD2
    pub red: OutputLine<'B', 14>,  // LD3
}

/// USART3 routed to the ST-LINK virtual COM port.
pub struct Usart3Pins {
    pub tx: gpiod::PD8<Alternate<7>>,
    pub rx: gpiod::PD9<Alternate<7>>,
}

/// STEP/DIR driver control lines.
pub struct StepperPins {
    pub step: OutputLine<'D', 15>,
    pub dir: OutputLine<'D', 14>,
    /// Active low.
    pub enable: OutputLine<'F', 12>,
    pub ms1: OutputLine<'F', 13>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals. Every output starts low except ENABLE,
    /// which starts high so the motor stays unpowered until the driver is configured.
    pub fn new(gpiob: pac::GPIOB, gpiod: pac::GPIOD, gpiof: pac::GPIOF) -> Self {
        let gpiob = gpiob.split();
        let gpiod = gpiod.split();
        let gpiof = gpiof.split();

        Self {
            leds: LedPins {
                green: OutputLine::new(gpiob.pb0, PinState::Low),
                blue: OutputLine::new(gpiob.pb7, PinState::Low),
                red: OutputLine::new(gpiob.pb14, PinState::Low),
            },

            usart3: Usart3Pins {
                tx: gpiod.pd8.into_alternate::<7>(),
                rx: gpiod.pd9.into_alternate::<7>(),
            },

            stepper: StepperPins {
                step: OutputLine::new(gpiod.pd15, PinState::Low),
                dir: OutputLine::new(gpiod.pd14, PinState::Low),
                enable: OutputLine::new(gpiof.pf12, PinState::High),
                ms1: OutputLine::new(gpiof.pf13, PinState::Low),
            },
        }
    }
}
