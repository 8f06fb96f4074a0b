//! Per-folder mailbox cache and its lifecycle transitions.
//!
//! The remote service owns all mail; this module only ever holds a read
//! cache plus locally confirmed transitions. The state machine per item is
//! `Active(Inbox) -> Trashed -> Purged`, with unarchive reversing the first
//! step. Sent items are immutable.

mod compose;
mod scope;
mod store;

pub use compose::{ComposeError, parse_receivers};
pub use scope::ViewScope;
pub use store::{FetchOutcome, FetchTicket, MailboxStore, PurgeReport, SendOutcome};

use serde::{Deserialize, Serialize};

/// A named partition of a user's mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Mail addressed to the user.
    Inbox,
    /// Mail the user sent.
    Sent,
    /// Archived mail, awaiting restore or permanent deletion.
    Trash,
}

impl Folder {
    /// All folders, in display order.
    pub const ALL: [Self; 3] = [Self::Inbox, Self::Sent, Self::Trash];

    /// Folder name as used in API paths and display.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Sent => "sent",
            Self::Trash => "trash",
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
