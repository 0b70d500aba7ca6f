// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Positioning Logic
//!
//! Hardware-independent core of the positioner. Everything here works against the
//! [`StepperDriver`](crate::drivers::StepperDriver) trait and runs unchanged on the host.
//!
//! ## Modules
//!
//! - [`angle`] - Wraparound arithmetic on the 0–360° circle.
//! - [`motion`] - Shortest-path step generation and the believed shaft angle.
//! - [`positioner`] - Command validation in front of the motion core.

pub mod angle;
pub mod motion;
pub mod positioner;

pub use angle::{normalize, shortest_delta};
pub use motion::{MotionController, MotionState, StepPlan};
pub use positioner::Positioner;
