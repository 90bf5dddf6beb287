use embassy_time::{Duration, Instant};

/// Stable-level transition reported by [`Debouncer::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

/// Time-based debouncer for a single digital input.
///
/// A raw level becomes the stable level only after it has been observed
/// unchanged for at least the debounce window. Any raw change restarts the
/// window, so glitches shorter than the window never reach consumers.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    stable: bool,
    raw: bool,
    raw_since: Instant,
    window: Duration,
}

impl Debouncer {
    /// Create a debouncer whose stable and raw levels both start at `initial`.
    pub fn new(initial: bool, window: Duration) -> Self {
        Self {
            stable: initial,
            raw: initial,
            raw_since: Instant::from_ticks(0),
            window,
        }
    }

    /// Accept `level` as both stable and raw without waiting out a window.
    pub fn reset(&mut self, level: bool) {
        self.stable = level;
        self.raw = level;
        self.raw_since = Instant::from_ticks(0);
    }

    /// Current stable level.
    pub fn level(&self) -> bool {
        self.stable
    }

    /// Last raw level seen.
    pub fn raw(&self) -> bool {
        self.raw
    }

    /// `true` while a raw level differs from the stable level and is waiting
    /// out the window.
    pub fn is_settling(&self) -> bool {
        self.raw != self.stable
    }

    /// Feed one raw sample taken at `now`.
    ///
    /// Returns the edge of the stable level if this sample committed a new
    /// one, `None` otherwise.
    pub fn update(&mut self, raw: bool, now: Instant) -> Option<Edge> {
        if raw != self.raw {
            self.raw = raw;
            self.raw_since = now;
        }

        if self.raw == self.stable {
            return None;
        }

        if now.saturating_duration_since(self.raw_since) < self.window {
            return None;
        }

        self.stable = self.raw;
        Some(if self.stable { Edge::Rising } else { Edge::Falling })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(100);

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn starts_at_initial_level() {
        let debouncer = Debouncer::new(true, WINDOW);
        assert!(debouncer.level());
        assert!(!debouncer.is_settling());
    }

    #[test]
    fn reset_takes_level_without_edge() {
        let mut debouncer = Debouncer::new(true, WINDOW);
        debouncer.update(false, at(10));
        debouncer.reset(false);
        assert!(!debouncer.level());
        assert!(!debouncer.is_settling());
        assert_eq!(debouncer.update(false, at(500)), None);
    }

    #[test]
    fn commits_after_window() {
        let mut debouncer = Debouncer::new(true, WINDOW);
        assert_eq!(debouncer.update(false, at(10)), None);
        assert_eq!(debouncer.update(false, at(109)), None);
        assert!(debouncer.is_settling());
        assert_eq!(debouncer.update(false, at(110)), Some(Edge::Falling));
        assert!(!debouncer.level());
        assert!(!debouncer.is_settling());
    }

    #[test]
    fn reports_edge_only_once() {
        let mut debouncer = Debouncer::new(false, WINDOW);
        debouncer.update(true, at(0));
        assert_eq!(debouncer.update(true, at(100)), Some(Edge::Rising));
        assert_eq!(debouncer.update(true, at(200)), None);
        assert_eq!(debouncer.update(true, at(900)), None);
    }

    #[test]
    fn rejects_glitches_shorter_than_window() {
        let mut debouncer = Debouncer::new(true, WINDOW);
        // Chatter every 30 ms for half a second, always returning high.
        let mut t = 0;
        while t < 500 {
            assert_eq!(debouncer.update(false, at(t)), None);
            assert_eq!(debouncer.update(true, at(t + 30)), None);
            t += 60;
        }
        assert!(debouncer.level());
    }

    #[test]
    fn bounce_restarts_window() {
        let mut debouncer = Debouncer::new(true, WINDOW);
        debouncer.update(false, at(0));
        debouncer.update(true, at(50));
        debouncer.update(false, at(60));
        // 100 ms after the first fall, but only 40 ms after the last one.
        assert_eq!(debouncer.update(false, at(100)), None);
        assert_eq!(debouncer.update(false, at(160)), Some(Edge::Falling));
    }

    #[test]
    fn zero_window_commits_immediately() {
        let mut debouncer = Debouncer::new(true, Duration::from_millis(0));
        assert_eq!(debouncer.update(false, at(5)), Some(Edge::Falling));
    }
}
