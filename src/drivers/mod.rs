// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! control logic. Drivers are written against `embedded-hal` traits so they build for the board and
//! for host tests alike.
//!
//! ## Existing drivers
//!
//! - [`step_dir`] – STEP/DIR stepper driver (A4988/DRV8825 class) with ENABLE and MS1 lines
//! - [`stepper`] – `StepperDriver` capability trait used by the motion core

pub mod step_dir;
pub mod stepper;

pub use step_dir::StepDir;
pub use stepper::{Direction, StepperDriver};
