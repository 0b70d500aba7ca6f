// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command boundary in front of the motion core.
//!
//! All input validation happens here, so [`MotionController`] only ever sees finite angles and
//! never fails. A rejected command leaves the position untouched.

use crate::config::{PositionerConfig, RangePolicy};
use crate::control::angle::FULL_TURN_DEG;
use crate::control::motion::MotionController;
use crate::drivers::StepperDriver;
use crate::protocol::{Command, CommandError, FinalAngle, Reply};

pub struct Positioner<D> {
    motion: MotionController<D>,
    range_policy: RangePolicy,
}

impl<D: StepperDriver> Positioner<D> {
    pub fn new(driver: D, config: &PositionerConfig) -> Self {
        Self {
            motion: MotionController::from_config(driver, config),
            range_policy: config.range_policy,
        }
    }

    /// One-time driver setup; call before the first command.
    pub fn configure(&mut self) {
        self.motion.configure();
    }

    #[inline]
    pub fn current_angle(&self) -> f32 {
        self.motion.current_angle()
    }

    #[inline]
    pub fn motion(&self) -> &MotionController<D> {
        &self.motion
    }

    #[inline]
    pub fn motion_mut(&mut self) -> &mut MotionController<D> {
        &mut self.motion
    }

    /// Go to an absolute angle.
    pub fn set_absolute(&mut self, angle_deg: f32) -> Result<FinalAngle, CommandError> {
        if !angle_deg.is_finite() {
            return Err(reject(CommandError::InvalidNumeric));
        }
        if self.range_policy == RangePolicy::Strict && !(0.0..FULL_TURN_DEG).contains(&angle_deg)
        {
            return Err(reject(CommandError::OutOfRange));
        }

        let plan = self.motion.move_to(angle_deg);
        Ok(FinalAngle::new(plan.target_deg))
    }

    /// Turn by a signed delta from the current angle. Any finite delta is accepted.
    pub fn set_relative(&mut self, delta_deg: f32) -> Result<FinalAngle, CommandError> {
        let target = self.motion.current_angle() + delta_deg;
        if !target.is_finite() {
            return Err(reject(CommandError::InvalidNumeric));
        }

        let plan = self.motion.move_to(target);
        Ok(FinalAngle::new(plan.target_deg))
    }

    pub fn execute(&mut self, command: Command) -> Result<FinalAngle, CommandError> {
        match command {
            Command::Absolute(angle) => self.set_absolute(angle),
            Command::Relative(delta) => self.set_relative(delta),
        }
    }

    /// Execute a command and build the console reply for it.
    pub fn respond(&mut self, command: Command) -> Reply {
        match (command, self.execute(command)) {
            (Command::Absolute(_), Ok(angle)) => Reply::AngleSet(angle),
            (Command::Relative(_), Ok(angle)) => Reply::NewAngle(angle),
            (_, Err(err)) => Reply::Rejected(err),
        }
    }
}

#[inline]
fn reject(err: CommandError) -> CommandError {
    #[cfg(feature = "defmt")]
    defmt::warn!("command rejected: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::Direction;
    use approx::assert_abs_diff_eq;

    #[derive(Default)]
    struct Counter {
        pulses: u32,
        last_direction: Option<Direction>,
    }

    impl StepperDriver for Counter {
        fn configure_driver(&mut self) {}

        fn set_direction(&mut self, direction: Direction) {
            self.last_direction = Some(direction);
        }

        fn pulse_step(&mut self) {
            self.pulses += 1;
        }
    }

    fn strict() -> Positioner<Counter> {
        Positioner::new(Counter::default(), &PositionerConfig::default())
    }

    fn wrapping() -> Positioner<Counter> {
        let cfg = PositionerConfig::default().with_range_policy(RangePolicy::Wrap);
        Positioner::new(Counter::default(), &cfg)
    }

    #[test]
    fn strict_rejects_full_turn_and_negatives() {
        let mut p = strict();
        p.set_absolute(90.0).unwrap();

        for bad in [360.0, 400.0, -0.5, -90.0] {
            assert_eq!(p.set_absolute(bad), Err(CommandError::OutOfRange));
        }
        assert_eq!(p.current_angle(), 90.0);
        assert_eq!(p.motion().driver().pulses, 100);
    }

    #[test]
    fn strict_accepts_lower_bound() {
        let mut p = strict();
        p.set_absolute(10.0).unwrap();
        assert_eq!(p.set_absolute(0.0).unwrap().degrees(), 0.0);
    }

    #[test]
    fn wrap_policy_normalizes() {
        let mut p = wrapping();
        let angle = p.set_absolute(400.0).unwrap();
        assert_abs_diff_eq!(angle.degrees(), 40.0, epsilon = 1e-4);
        let angle = p.set_absolute(-90.0).unwrap();
        assert_abs_diff_eq!(angle.degrees(), 270.0, epsilon = 1e-4);
    }

    #[test]
    fn non_finite_input_never_moves() {
        let mut p = wrapping();
        assert_eq!(p.set_absolute(f32::NAN), Err(CommandError::InvalidNumeric));
        assert_eq!(
            p.set_absolute(f32::INFINITY),
            Err(CommandError::InvalidNumeric)
        );
        assert_eq!(
            p.set_relative(f32::NEG_INFINITY),
            Err(CommandError::InvalidNumeric)
        );
        assert_eq!(p.current_angle(), 0.0);
        assert_eq!(p.motion().driver().pulses, 0);
    }

    #[test]
    fn relative_moves_wrap_in_both_directions() {
        let mut p = strict();
        assert_abs_diff_eq!(p.set_relative(-20.0).unwrap().degrees(), 340.0, epsilon = 1e-4);
        assert_abs_diff_eq!(p.set_relative(30.0).unwrap().degrees(), 10.0, epsilon = 1e-3);
        assert_abs_diff_eq!(p.set_relative(725.0).unwrap().degrees(), 15.0, epsilon = 1e-3);
    }

    #[test]
    fn replies_match_command_kind() {
        let mut p = strict();
        assert_eq!(
            p.respond(Command::Absolute(45.0)),
            Reply::AngleSet(FinalAngle::new(45.0))
        );
        assert_eq!(
            p.respond(Command::Relative(-45.0)),
            Reply::NewAngle(FinalAngle::new(0.0))
        );
        assert_eq!(
            p.respond(Command::Absolute(400.0)),
            Reply::Rejected(CommandError::OutOfRange)
        );
    }
}
