// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Angle arithmetic on the 0–360° circle.
//!
//! Works in `no_std`; the float helpers come from `micromath` on the target.

#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

/// Degrees in one revolution.
pub const FULL_TURN_DEG: f32 = 360.0;

/// Half a revolution; the largest displacement a shortest-path move can take.
pub const HALF_TURN_DEG: f32 = 180.0;

/// Wrap any finite angle onto `[0, 360)`.
///
/// Single Euclidean remainder, so it is valid for any magnitude and either sign. A tiny negative
/// input whose remainder rounds up to exactly 360.0 maps to 0.0, and whole negative turns give
/// +0.0 rather than -0.0.
///
/// Non-finite input is a caller bug: it trips a debug assertion, and release builds return 0.0.
pub fn normalize(angle: f32) -> f32 {
    debug_assert!(angle.is_finite(), "normalize() called with non-finite angle");
    if !angle.is_finite() {
        return 0.0;
    }

    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        // -0.0 + 0.0 == +0.0
        wrapped + 0.0
    }
}

/// Signed displacement from `current` to `target` along the shorter arc.
///
/// Both inputs are expected in `[0, 360)`. The result lies in `[-180, 180]`; a target exactly
/// opposite and ahead (+180) stays positive.
pub fn shortest_delta(current: f32, target: f32) -> f32 {
    let difference = target - current;
    if difference > HALF_TURN_DEG {
        difference - FULL_TURN_DEG
    } else if difference < -HALF_TURN_DEG {
        difference + FULL_TURN_DEG
    } else {
        difference
    }
}
