//! Transient "MIDI message sent" indicator.

use embassy_time::{Duration, Instant};

/// Signal for the indicator surface (display line, LED, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorEvent {
    /// A message was sent; show the indicator.
    Shown,
    /// The visibility window elapsed; hide it.
    Cleared,
}

/// Visibility timer armed on every emission.
///
/// Re-arming while visible restarts the window. The indicator clears itself
/// on the first [`poll`](Self::poll) at or after `armed_at + duration`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MessageIndicator {
    duration: Duration,
    armed_at: Option<Instant>,
}

impl MessageIndicator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            armed_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.armed_at.is_some()
    }

    /// Instant at which the indicator will clear, if visible.
    pub fn clears_at(&self) -> Option<Instant> {
        self.armed_at.map(|armed| armed + self.duration)
    }

    /// Show the indicator from `now` on.
    pub fn arm(&mut self, now: Instant) -> IndicatorEvent {
        self.armed_at = Some(now);
        IndicatorEvent::Shown
    }

    /// Returns [`IndicatorEvent::Cleared`] once, when the window elapses.
    pub fn poll(&mut self, now: Instant) -> Option<IndicatorEvent> {
        let clears_at = self.clears_at()?;
        if now < clears_at {
            return None;
        }
        self.armed_at = None;
        Some(IndicatorEvent::Cleared)
    }
}
