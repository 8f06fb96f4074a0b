//! # gomail-core
//!
//! Core client-side state for the GoMail webmail client.
//!
//! This crate provides:
//! - Session management (credential token, identity, role derivation)
//! - Single-slot auto-expiring notifications
//! - Per-folder mailbox cache with confirmed-transition reconciliation
//! - Double-click disambiguation for list rows
//! - Admin list filtering and sorting
//! - Route authorization decisions
//!
//! The view layer consumes these components through their public contracts;
//! the HTTP wire layer is injected through the gateway traits in
//! [`gateway`], implemented by `gomail-api`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod admin;
pub mod clock;
mod config;
mod error;
pub mod gateway;
pub mod mailbox;
mod notify;
mod route;
mod selection;
pub mod session;

pub use admin::{AdminQuery, AdminStore, SortField, SortOrder};
pub use clock::{Clock, MockClock, SystemClock};
pub use config::CoreConfig;
pub use error::{Error, Result};
pub use gateway::{AdminGateway, AuthGateway, MailGateway};
pub use mailbox::{
    ComposeError, FetchOutcome, Folder, MailboxStore, PurgeReport, SendOutcome, ViewScope,
    parse_receivers,
};
pub use notify::{NotificationChannel, NotificationHandle};
pub use route::{Route, RouteDecision, authorize, visible_nav};
pub use selection::ClickDisambiguator;
pub use session::{
    KeyringTokenStore, MemoryTokenStore, RegistrationError, SessionManager, TokenStore,
    TokenStoreError, TokenStoreResult,
};

pub use gomail_api::{ApiClient, ApiError, AuthHeader, Mail, MailId, User, UserId};
