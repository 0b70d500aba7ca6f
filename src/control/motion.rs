// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Open-loop shortest-path positioning on the 0–360° circle.
//!
//! [`MotionController`] owns the believed shaft angle and a [`StepperDriver`]. Each move wraps the
//! target onto the circle, picks the shorter arc, converts it to whole pulses and emits them before
//! returning. Typical usage:
//!
//! ```ignore
//! let mut motion = MotionController::from_config(driver, &PositionerConfig::default());
//! motion.configure();
//!
//! motion.move_to(350.0); // -10°: 11 pulses, negative direction
//! motion.move_by(45.0);  // lands on 35°
//! ```

#[cfg(not(test))]
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::PositionerConfig;
use crate::control::angle::{normalize, shortest_delta};
use crate::drivers::{Direction, StepperDriver};

/// Whether the controller is free to accept a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotionState {
    /// Waiting for the next command.
    Idle,
    /// Emitting pulses; not interruptible.
    Moving,
}

/// Pulses needed to get from the current angle to one target.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepPlan {
    pub direction: Direction,
    pub steps: u32,
    /// Signed shortest-arc displacement in degrees, within `[-180, 180]`.
    pub displacement_deg: f32,
    /// Normalized target in `[0, 360)`.
    pub target_deg: f32,
}

impl StepPlan {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }
}

pub struct MotionController<D> {
    driver: D,
    /// Degrees per STEP pulse.
    step_angle_deg: f32,
    /// Believed shaft angle, always in `[0, 360)`. Power-on position is taken as 0°.
    current_angle: f32,
    state: MotionState,
}

impl<D: StepperDriver> MotionController<D> {
    /// Create a controller at 0° with the given step resolution.
    pub fn new(driver: D, step_angle_deg: f32) -> Self {
        debug_assert!(step_angle_deg > 0.0, "step angle must be positive");
        Self {
            driver,
            step_angle_deg,
            current_angle: 0.0,
            state: MotionState::Idle,
        }
    }

    pub fn from_config(driver: D, config: &PositionerConfig) -> Self {
        Self::new(driver, config.step_angle_deg())
    }

    /// Run the driver's one-time setup (enable stage, micro-step select).
    pub fn configure(&mut self) {
        self.driver.configure_driver();
    }

    #[inline]
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    /// Moves block inside [`move_to`](Self::move_to), so a caller holding the controller always
    /// reads [`MotionState::Idle`] here. `Moving` holds only for the duration of that call.
    #[inline]
    pub fn state(&self) -> MotionState {
        self.state
    }

    #[inline]
    pub fn step_angle_deg(&self) -> f32 {
        self.step_angle_deg
    }

    /// Work out direction and pulse count for `target_raw` without moving.
    pub fn plan(&self, target_raw: f32) -> StepPlan {
        let target_deg = normalize(target_raw);
        let displacement_deg = shortest_delta(self.current_angle, target_deg);
        let steps = (displacement_deg.abs() / self.step_angle_deg).round() as u32;

        StepPlan {
            direction: Direction::of(displacement_deg),
            steps,
            displacement_deg,
            target_deg,
        }
    }

    /// Move to an absolute angle (any finite value; it is wrapped first).
    ///
    /// Blocks until every pulse has been emitted, then records the normalized target as the new
    /// position. Returns the plan that was executed.
    pub fn move_to(&mut self, target_raw: f32) -> StepPlan {
        let plan = self.plan(target_raw);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "move {} -> {}: {} steps {}",
            self.current_angle,
            plan.target_deg,
            plan.steps,
            plan.direction
        );

        self.state = MotionState::Moving;
        if !plan.is_empty() {
            self.driver.set_direction(plan.direction);
            for _ in 0..plan.steps {
                self.driver.pulse_step();
            }
        }
        self.current_angle = plan.target_deg;
        self.state = MotionState::Idle;

        plan
    }

    /// Move by a signed delta from the current angle.
    pub fn move_by(&mut self, delta_deg: f32) -> StepPlan {
        self.move_to(self.current_angle + delta_deg)
    }

    #[inline]
    pub fn driver(&self) -> &D {
        &self.driver
    }

    #[inline]
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Give the driver back.
    pub fn release(self) -> D {
        self.driver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::StepDir;
    use crate::sim::{Line, Trace};
    use approx::assert_abs_diff_eq;

    /// Driver that only counts what it was asked to do.
    #[derive(Default)]
    struct Counter {
        configured: bool,
        direction: Option<Direction>,
        pulses: u32,
    }

    impl StepperDriver for Counter {
        fn configure_driver(&mut self) {
            self.configured = true;
        }

        fn set_direction(&mut self, direction: Direction) {
            self.direction = Some(direction);
        }

        fn pulse_step(&mut self) {
            self.pulses += 1;
        }
    }

    fn controller() -> MotionController<Counter> {
        MotionController::new(Counter::default(), 0.9)
    }

    #[test]
    fn starts_idle_at_zero() {
        let motion = controller();
        assert_eq!(motion.current_angle(), 0.0);
        assert_eq!(motion.state(), MotionState::Idle);
    }

    #[test]
    fn configure_reaches_driver() {
        let mut motion = controller();
        motion.configure();
        assert!(motion.driver().configured);
    }

    #[test]
    fn plan_does_not_move() {
        let motion = controller();
        let plan = motion.plan(90.0);
        assert_eq!(plan.steps, 100);
        assert_eq!(plan.direction, Direction::Positive);
        assert_eq!(motion.current_angle(), 0.0);
        assert_eq!(motion.driver().pulses, 0);
    }

    #[test]
    fn wraps_backwards_across_zero() {
        let mut motion = controller();
        let plan = motion.move_to(350.0);
        assert_eq!(plan.direction, Direction::Negative);
        assert_eq!(plan.steps, 11);
        assert_eq!(motion.driver().pulses, 11);
        assert_eq!(motion.driver().direction, Some(Direction::Negative));
        assert_eq!(motion.current_angle(), 350.0);
    }

    #[test]
    fn repeated_target_is_a_no_op() {
        let mut motion = controller();
        motion.move_to(123.4);
        let pulses = motion.driver().pulses;

        let again = motion.move_to(123.4);
        assert!(again.is_empty());
        assert_eq!(motion.driver().pulses, pulses);
    }

    #[test]
    fn zero_step_move_leaves_direction_untouched() {
        let mut motion = controller();
        motion.move_to(0.2); // rounds to zero pulses
        assert_eq!(motion.driver().direction, None);
        assert_abs_diff_eq!(motion.current_angle(), 0.2);
    }

    #[test]
    fn whole_negative_turn_lands_on_positive_zero() {
        let mut motion = controller();
        motion.move_to(90.0);
        motion.move_to(-360.0);
        assert_eq!(motion.current_angle(), 0.0);
        assert!(motion.current_angle().is_sign_positive());
    }

    #[test]
    fn release_hands_back_the_driver() {
        let mut motion = controller();
        motion.configure();
        motion.move_to(45.0);

        let driver = motion.release();
        assert!(driver.configured);
        assert_eq!(driver.pulses, 50);
    }

    #[test]
    fn out_of_range_targets_are_wrapped() {
        let mut motion = controller();
        motion.move_to(-90.0);
        assert_abs_diff_eq!(motion.current_angle(), 270.0, epsilon = 1e-4);
        motion.move_to(725.0);
        assert_abs_diff_eq!(motion.current_angle(), 5.0, epsilon = 1e-3);
    }

    #[test]
    fn move_by_composes_with_wraparound() {
        let mut motion = controller();
        motion.move_to(10.0);
        let plan = motion.move_by(-20.0);
        assert_abs_diff_eq!(plan.target_deg, 350.0, epsilon = 1e-4);
        assert_eq!(plan.direction, Direction::Negative);
        assert_eq!(plan.steps, 22);
    }

    #[test]
    fn final_position_is_path_independent() {
        let mut motion = controller();
        for b in [0.0, 90.0, 179.0, 181.0, 359.0, -45.0, 1000.0] {
            motion.move_to(42.0);
            assert_eq!(motion.current_angle(), 42.0);
            motion.move_to(b);
        }
    }

    #[test]
    fn displacement_never_exceeds_half_turn() {
        let mut motion = controller();
        let mut target = -400.0;
        while target < 800.0 {
            let plan = motion.move_to(target);
            assert!(plan.displacement_deg.abs() <= 180.0);
            assert!(plan.steps <= 200);
            assert!((0.0..360.0).contains(&motion.current_angle()));
            target += 37.3;
        }
    }

    #[test]
    fn pulse_train_timing_on_step_dir() {
        let trace = Trace::new();
        let config = PositionerConfig::default();
        let driver = StepDir::new(
            trace.pin(Line::Step),
            trace.pin(Line::Dir),
            trace.pin(Line::Enable),
            trace.pin(Line::Ms1),
            trace.delay(),
            &config,
        );
        let mut motion = MotionController::from_config(driver, &config);
        motion.configure();
        trace.clear();

        let plan = motion.move_to(45.0);

        assert_eq!(plan.steps, 50);
        assert_eq!(trace.rising_edges(Line::Step), 50);
        assert_eq!(trace.level(Line::Dir), Some(true));
        assert_eq!(trace.elapsed_ns(), 50 * 2 * 1_000_000);
    }
}
