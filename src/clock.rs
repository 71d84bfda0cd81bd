//! Time sources for the solver's deadline check.
//!
//! The solver reads the time once per popped node. Injecting the clock lets
//! tests drive the deadline deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Trait for anything that can report the current instant
pub trait Clock {
    /// Returns the current instant
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually driven clock for tests
///
/// Clones share the same time, so a test can keep one handle and advance it
/// while the solver owns another. With a non-zero step, every call to `now`
/// returns the current time and then moves it forward by the step.
///
/// ```
/// use std::time::Duration;
/// use pegsearch::{Clock, ManualClock};
///
/// let clock = ManualClock::stepping(Duration::from_secs(1));
/// let first = clock.now();
/// assert_eq!(clock.now() - first, Duration::from_secs(1));
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<Instant>>,
    step: Duration,
}

impl ManualClock {
    /// Creates a frozen clock; time only moves through [`advance`](Self::advance)
    pub fn new() -> Self {
        Self::stepping(Duration::ZERO)
    }

    /// Creates a clock that moves forward by `step` on every read
    pub fn stepping(step: Duration) -> Self {
        ManualClock {
            current: Rc::new(Cell::new(Instant::now())),
            step,
        }
    }

    /// Moves the clock forward
    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}
