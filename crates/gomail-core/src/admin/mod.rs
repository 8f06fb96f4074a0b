//! Admin-facing mail and user administration.
//!
//! The filter/sort engine in [`query`] is a pure function of its inputs;
//! the store mirrors the mailbox store's confirmed-success cache policy for
//! the privileged endpoints.

mod query;
mod store;

pub use query::{AdminQuery, SortField, SortOrder};
pub use store::AdminStore;
