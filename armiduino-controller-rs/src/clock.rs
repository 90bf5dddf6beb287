//! Monotonic time source used by the debounce, pacing and indicator timers.
//!
//! Nothing in this crate sleeps. Every timer is a "has enough time elapsed"
//! comparison against [`Clock::now`], so the clock is the only thing a test
//! has to control to simulate the passage of time.

use core::cell::Cell;

use embassy_time::{Duration, Instant};

/// A monotonic millisecond-or-better clock.
pub trait Clock {
    /// Current instant. Must never go backwards.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Clock backed by the embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually driven clock for simulations and tests.
///
/// # Examples
///
/// ```
/// use armiduino::clock::{Clock, ManualClock};
/// use embassy_time::Duration;
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(250));
/// assert_eq!(clock.now().as_millis(), 250);
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Start at instant zero.
    pub const fn new() -> Self {
        Self {
            now: Cell::new(Instant::from_ticks(0)),
        }
    }

    /// Jump to an absolute instant. Earlier instants are ignored to keep the
    /// clock monotonic.
    pub fn set(&self, instant: Instant) {
        if instant > self.now.get() {
            self.now.set(instant);
        }
    }

    /// Jump to an absolute number of milliseconds since start.
    pub fn set_millis(&self, millis: u64) {
        self.set(Instant::from_millis(millis));
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        let clock = ManualClock::new();
        assert_eq!(clock.now().as_millis(), 0);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(100));
        clock.advance(Duration::from_millis(5));
        assert_eq!(clock.now().as_millis(), 105);
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new();
        clock.set_millis(500);
        clock.set_millis(200);
        assert_eq!(clock.now().as_millis(), 500);
    }

    #[test]
    fn reference_is_a_clock() {
        fn read<C: Clock>(clock: C) -> u64 {
            clock.now().as_millis()
        }

        let clock = ManualClock::new();
        clock.set_millis(42);
        assert_eq!(read(&clock), 42);
    }
}
