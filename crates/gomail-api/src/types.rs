//! Wire types for the GoMail service API.
//!
//! Field casing mirrors the backend's JSON exactly: mail objects use
//! PascalCase keys (Go structs without tags), user objects and request
//! bodies use lowercase keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a mail item, assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MailId(pub u64);

impl std::fmt::Display for MailId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user account, assigned by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A mail item as returned by the list endpoints.
///
/// The trash listing omits sender and receivers, so both default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    /// Server-assigned identifier.
    #[serde(rename = "ID")]
    pub id: MailId,
    /// Sender address.
    #[serde(rename = "Sender", default)]
    pub sender: String,
    /// Receiver addresses, in the order they were given at send time.
    #[serde(rename = "Receivers", default, deserialize_with = "receivers_list")]
    pub receivers: Vec<String>,
    /// Subject line.
    #[serde(rename = "Subject", default)]
    pub subject: String,
    /// Message body.
    #[serde(rename = "Body", default)]
    pub body: String,
    /// Server-side creation timestamp.
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

/// The server serializes receivers either as a JSON array or as a string
/// holding a JSON-encoded array (the sent listing does the latter). Accept
/// both; a plain address string becomes a one-element list.
fn receivers_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<String>),
        Encoded(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::List(list) => Ok(list),
        Raw::Encoded(text) => Ok(serde_json::from_str(&text).unwrap_or_else(|_| vec![text])),
    }
}

/// Wrapper used by every mail list endpoint: `{"mails": [...]}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MailListResponse {
    pub mails: Vec<Mail>,
}

/// Account role as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary account.
    User,
    /// Privileged account.
    Admin,
}

/// A user account as returned by the admin user listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Account email address.
    pub email: String,
    /// Account role.
    #[serde(default = "Role::user")]
    pub role: Role,
}

impl Role {
    const fn user() -> Self {
        Self::User
    }
}

/// Login/registration request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password, sent in the clear over the transport.
    pub password: String,
}

/// Outgoing mail request body for `/mail/send`.
#[derive(Debug, Clone, Serialize)]
pub struct Outgoing {
    /// Receiver addresses.
    pub receivers: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
}

/// Error body the backend attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_with_receiver_array() {
        let json = r#"{
            "ID": 7,
            "Sender": "alice@gomail.kurs",
            "Receivers": ["bob@gomail.kurs", "carol@gomail.kurs"],
            "Subject": "Hello",
            "Body": "Hi there",
            "CreatedAt": "2026-01-10T12:00:00Z"
        }"#;

        let mail: Mail = serde_json::from_str(json).unwrap();
        assert_eq!(mail.id, MailId(7));
        assert_eq!(mail.receivers.len(), 2);
        assert_eq!(mail.receivers[0], "bob@gomail.kurs");
    }

    #[test]
    fn test_mail_with_encoded_receivers() {
        // The sent listing returns receivers as a JSON-encoded string.
        let json = r#"{
            "ID": 8,
            "Sender": "alice@gomail.kurs",
            "Receivers": "[\"bob@gomail.kurs\"]",
            "Subject": "Hello",
            "Body": "Hi",
            "CreatedAt": "2026-01-10T12:00:00Z"
        }"#;

        let mail: Mail = serde_json::from_str(json).unwrap();
        assert_eq!(mail.receivers, vec!["bob@gomail.kurs".to_string()]);
    }

    #[test]
    fn test_trash_mail_without_sender() {
        // Trash entries carry only ID, Subject, Body, CreatedAt.
        let json = r#"{
            "ID": 3,
            "Subject": "Old",
            "Body": "Stale",
            "CreatedAt": "2025-12-01T08:30:00Z"
        }"#;

        let mail: Mail = serde_json::from_str(json).unwrap();
        assert_eq!(mail.id, MailId(3));
        assert!(mail.sender.is_empty());
        assert!(mail.receivers.is_empty());
    }

    #[test]
    fn test_user_role_default() {
        let user: User = serde_json::from_str(r#"{"id": 1, "email": "a@gomail.kurs"}"#).unwrap();
        assert_eq!(user.role, Role::User);

        let admin: User =
            serde_json::from_str(r#"{"id": 2, "email": "b@admin.gomail.kurs", "role": "admin"}"#)
                .unwrap();
        assert_eq!(admin.role, Role::Admin);
    }
}
