//! View-lifetime cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token tied to a consumer's lifetime.
///
/// A view that stops observing a folder cancels its scope on teardown;
/// responses that land afterwards are dropped instead of being applied to a
/// cache no one observes. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct ViewScope(Arc<AtomicBool>);

impl ViewScope {
    /// Creates a live scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the scope cancelled. Irreversible.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the scope has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_shared_across_clones() {
        let scope = ViewScope::new();
        let clone = scope.clone();
        assert!(!clone.is_cancelled());

        scope.cancel();
        assert!(clone.is_cancelled());
    }
}
