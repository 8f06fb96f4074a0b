//! Double-click disambiguation for list rows.

use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// Turns a stream of row clicks into open-detail decisions.
///
/// Two clicks closer together than the threshold count as one open-detail
/// gesture. The window is keyed per list view, not per row: clicking two
/// different rows within the window also opens the second row's detail.
/// That is deliberate, carried over from the original client behavior.
#[derive(Debug)]
pub struct ClickDisambiguator<C: Clock = SystemClock> {
    clock: C,
    threshold: Duration,
    last_click: Option<Instant>,
}

impl ClickDisambiguator<SystemClock> {
    /// Creates a disambiguator on the system clock.
    #[must_use]
    pub const fn new(threshold: Duration) -> Self {
        Self::with_clock(SystemClock, threshold)
    }
}

impl<C: Clock> ClickDisambiguator<C> {
    /// Creates a disambiguator with an injected clock.
    pub const fn with_clock(clock: C, threshold: Duration) -> Self {
        Self {
            clock,
            threshold,
            last_click: None,
        }
    }

    /// Records a click and reports whether it completes a double click.
    ///
    /// Returns `true` iff the previous click happened strictly less than the
    /// threshold ago. The click time is recorded either way.
    pub fn register_click(&mut self) -> bool {
        let now = self.clock.now();
        let open_detail = self
            .last_click
            .is_some_and(|last| now.duration_since(last) < self.threshold);
        self.last_click = Some(now);
        open_detail
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    const THRESHOLD: Duration = Duration::from_millis(300);

    #[test]
    fn test_second_click_within_window_opens_detail() {
        let clock = MockClock::new();
        let mut clicks = ClickDisambiguator::with_clock(&clock, THRESHOLD);

        assert!(!clicks.register_click());
        clock.advance(Duration::from_millis(250));
        assert!(clicks.register_click());
    }

    #[test]
    fn test_second_click_outside_window_does_not() {
        let clock = MockClock::new();
        let mut clicks = ClickDisambiguator::with_clock(&clock, THRESHOLD);

        assert!(!clicks.register_click());
        clock.advance(Duration::from_millis(350));
        assert!(!clicks.register_click());
    }

    #[test]
    fn test_click_at_exact_threshold_does_not() {
        let clock = MockClock::new();
        let mut clicks = ClickDisambiguator::with_clock(&clock, THRESHOLD);

        clicks.register_click();
        clock.advance(THRESHOLD);
        assert!(!clicks.register_click());
    }

    #[test]
    fn test_every_click_restarts_the_window() {
        let clock = MockClock::new();
        let mut clicks = ClickDisambiguator::with_clock(&clock, THRESHOLD);

        clicks.register_click();
        clock.advance(Duration::from_millis(350));
        // Misses the window, but still arms the next one.
        assert!(!clicks.register_click());
        clock.advance(Duration::from_millis(100));
        assert!(clicks.register_click());
    }
}
