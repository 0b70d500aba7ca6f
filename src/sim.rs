// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Recording stand-ins for GPIO lines and the delay source, used by unit tests.

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

/// Output lines of a step/dir driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Line {
    Step,
    Dir,
    Enable,
    Ms1,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    High(Line),
    Low(Line),
    DelayNs(u32),
}

/// Shared, ordered log of every pin edge and delay.
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, line: Line) -> SimPin {
        SimPin {
            line,
            trace: self.clone(),
        }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            trace: self.clone(),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Number of rising edges seen on `line`.
    pub fn rising_edges(&self, line: Line) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| **e == Event::High(line))
            .count()
    }

    /// Total simulated time spent in delays.
    pub fn elapsed_ns(&self) -> u64 {
        self.0
            .borrow()
            .iter()
            .map(|e| match e {
                Event::DelayNs(ns) => *ns as u64,
                _ => 0,
            })
            .sum()
    }

    /// Last level driven on `line`, if any.
    pub fn level(&self, line: Line) -> Option<bool> {
        self.0.borrow().iter().rev().find_map(|e| match e {
            Event::High(l) if *l == line => Some(true),
            Event::Low(l) if *l == line => Some(false),
            _ => None,
        })
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

pub struct SimPin {
    line: Line,
    trace: Trace,
}

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::Low(self.line));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.trace.push(Event::High(self.line));
        Ok(())
    }
}

pub struct SimDelay {
    trace: Trace,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::DelayNs(ns));
    }
}
