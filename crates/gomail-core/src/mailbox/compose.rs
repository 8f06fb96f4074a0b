//! Compose input handling.

use thiserror::Error;

/// Local validation failures for outgoing mail.
///
/// These block the send before any network call; the form surfaces them
/// inline, no notification is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// The receiver input produced no addresses.
    #[error("at least one receiver is required")]
    NoReceivers,
}

/// Splits a comma-separated receiver input into addresses.
///
/// Entries are trimmed and empty ones dropped, so `"a@x, ,b@x,"` yields
/// `["a@x", "b@x"]`.
#[must_use]
pub fn parse_receivers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
