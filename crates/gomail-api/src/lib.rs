//! # gomail-api
//!
//! Typed HTTP client for the GoMail web service API.
//!
//! This crate covers the fixed `/api/v1` contract exposed by the GoMail
//! backend:
//! - Authentication (`/login`, `/register`)
//! - Mailbox folders (`/mail/inbox`, `/mail/sent`, `/mail/trash`)
//! - Sending (`/mail/send`) and per-mail transitions (archive, unarchive,
//!   permanent delete)
//! - Admin endpoints (`/admin/users`, `/admin/mails`)
//!
//! It knows nothing about sessions or caching; callers supply a prebuilt
//! [`AuthHeader`] for protected requests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

pub use client::{ApiClient, AuthHeader};
pub use error::{ApiError, Result};
pub use types::{Credentials, ErrorBody, Mail, MailId, Outgoing, Role, User, UserId};
