//! Single-slot notification channel.
//!
//! Errors and action outcomes surface to the user through exactly one live
//! notification. A new message replaces whatever is showing; each message
//! self-expires after the configured lifetime unless dismissed earlier.
//! Bursts therefore overwrite, they never queue.

use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// Handle to a pushed notification.
///
/// Dismissing through a handle only clears the notification that handle was
/// issued for; handles to already-replaced notifications are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationHandle(u64);

#[derive(Debug)]
struct Slot {
    id: u64,
    message: String,
    created_at: Instant,
}

/// The process-wide notification surface.
#[derive(Debug)]
pub struct NotificationChannel<C: Clock = SystemClock> {
    clock: C,
    ttl: Duration,
    slot: Option<Slot>,
    next_id: u64,
}

impl NotificationChannel<SystemClock> {
    /// Creates a channel on the system clock.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self::with_clock(SystemClock, ttl)
    }
}

impl<C: Clock> NotificationChannel<C> {
    /// Creates a channel with an injected clock.
    pub const fn with_clock(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            slot: None,
            next_id: 0,
        }
    }

    /// Installs `message` as the current notification, replacing any prior
    /// one, and starts its expiry countdown.
    pub fn push(&mut self, message: impl Into<String>) -> NotificationHandle {
        self.next_id += 1;
        let id = self.next_id;
        self.slot = Some(Slot {
            id,
            message: message.into(),
            created_at: self.clock.now(),
        });
        NotificationHandle(id)
    }

    /// Clears the notification if `handle` still refers to the current one.
    pub fn dismiss(&mut self, handle: NotificationHandle) {
        if self.slot.as_ref().is_some_and(|slot| slot.id == handle.0) {
            self.slot = None;
        }
    }

    /// How many notifications have been pushed over the channel's lifetime.
    #[must_use]
    pub const fn push_count(&self) -> u64 {
        self.next_id
    }

    /// The live notification message, if one is showing.
    ///
    /// A message older than the channel's lifetime counts as expired and is
    /// not returned.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.slot
            .as_ref()
            .filter(|slot| self.clock.elapsed(slot.created_at) < self.ttl)
            .map(|slot| slot.message.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    const TTL: Duration = Duration::from_millis(2000);

    #[test]
    fn test_push_replaces_previous() {
        let clock = MockClock::new();
        let mut channel = NotificationChannel::with_clock(&clock, TTL);

        channel.push("first");
        channel.push("second");
        assert_eq!(channel.current(), Some("second"));
    }

    #[test]
    fn test_expires_after_ttl() {
        let clock = MockClock::new();
        let mut channel = NotificationChannel::with_clock(&clock, TTL);

        channel.push("transient");
        clock.advance(Duration::from_millis(1999));
        assert_eq!(channel.current(), Some("transient"));

        clock.advance(Duration::from_millis(1));
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn test_dismiss_current() {
        let clock = MockClock::new();
        let mut channel = NotificationChannel::with_clock(&clock, TTL);

        let handle = channel.push("gone soon");
        channel.dismiss(handle);
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn test_stale_handle_is_noop() {
        let clock = MockClock::new();
        let mut channel = NotificationChannel::with_clock(&clock, TTL);

        let stale = channel.push("first");
        channel.push("second");
        channel.dismiss(stale);
        assert_eq!(channel.current(), Some("second"));
    }

    #[test]
    fn test_replacement_restarts_countdown() {
        let clock = MockClock::new();
        let mut channel = NotificationChannel::with_clock(&clock, TTL);

        channel.push("first");
        clock.advance(Duration::from_millis(1500));
        channel.push("second");
        clock.advance(Duration::from_millis(1500));
        assert_eq!(channel.current(), Some("second"));
    }
}
