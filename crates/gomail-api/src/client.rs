//! HTTP client for the GoMail service.

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::types::{Credentials, ErrorBody, Mail, MailId, MailListResponse, Outgoing, User, UserId};

/// Prebuilt `Authorization` header value for protected requests.
///
/// The service expects HTTP Basic with the client-encoded credential token.
/// Construction lives with the session layer; this type only carries the
/// finished value so the wire layer never sees raw credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader(String);

impl AuthHeader {
    /// Builds the header value from an already-encoded credential token.
    #[must_use]
    pub fn basic(token: &str) -> Self {
        Self(format!("Basic {token}"))
    }

    /// The full header value, e.g. `Basic YWxpY2U6cGFzcw==`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Client for the GoMail `/api/v1` contract.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// `base_url` should include the API prefix, e.g.
    /// `http://localhost:8081/api/v1`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Verifies credentials against the service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with status 401 on bad credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        debug!(email = %credentials.email, "login request");
        let response = self
            .http
            .post(self.url("/login"))
            .json(credentials)
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is rejected or already taken.
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        debug!(email = %credentials.email, "register request");
        let response = self
            .http
            .post(self.url("/register"))
            .json(credentials)
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }

    /// Lists the inbox folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn inbox(&self, auth: &AuthHeader) -> Result<Vec<Mail>> {
        self.mail_list_get("/mail/inbox", auth).await
    }

    /// Lists the sent folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn sent(&self, auth: &AuthHeader) -> Result<Vec<Mail>> {
        self.mail_list_get("/mail/sent", auth).await
    }

    /// Lists the trash folder.
    ///
    /// The service exposes this read as a POST with an empty body; the
    /// request shape is kept as-is for wire compatibility.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn trash(&self, auth: &AuthHeader) -> Result<Vec<Mail>> {
        let response = self
            .http
            .post(self.url("/mail/trash"))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .json(&json!({}))
            .send()
            .await?;
        let response = expect_success(response).await?;
        let list: MailListResponse = response.json().await?;
        Ok(list.mails)
    }

    /// Sends a new mail.
    ///
    /// # Errors
    ///
    /// Returns an error if the service rejects the message.
    pub async fn send(&self, auth: &AuthHeader, outgoing: &Outgoing) -> Result<()> {
        debug!(receivers = outgoing.receivers.len(), "send request");
        let response = self
            .http
            .post(self.url("/mail/send"))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .json(outgoing)
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }

    /// Moves a mail to the trash folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the service refuses the transition.
    pub async fn archive(&self, auth: &AuthHeader, id: MailId) -> Result<()> {
        self.empty_post(&format!("/mail/{id}/archive"), auth).await
    }

    /// Restores a trashed mail to the inbox.
    ///
    /// # Errors
    ///
    /// Returns an error if the service refuses the transition.
    pub async fn unarchive(&self, auth: &AuthHeader, id: MailId) -> Result<()> {
        self.empty_post(&format!("/mail/{id}/unarchive"), auth)
            .await
    }

    /// Permanently deletes a trashed mail.
    ///
    /// # Errors
    ///
    /// Returns an error if the service refuses the deletion.
    pub async fn purge(&self, auth: &AuthHeader, id: MailId) -> Result<()> {
        debug!(%id, "purge request");
        let response = self
            .http
            .delete(self.url(&format!("/mail/{id}/delete")))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }

    /// Lists all non-admin user accounts (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the admin role.
    pub async fn admin_users(&self, auth: &AuthHeader) -> Result<Vec<User>> {
        let response = self
            .http
            .get(self.url("/admin/users"))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .send()
            .await?;
        let response = expect_success(response).await?;
        Ok(response.json().await?)
    }

    /// Deletes a user account (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the admin role.
    pub async fn admin_delete_user(&self, auth: &AuthHeader, id: UserId) -> Result<()> {
        debug!(%id, "admin delete user");
        let response = self
            .http
            .delete(self.url(&format!("/admin/users/{id}")))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }

    /// Lists every mail in the system (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the admin role.
    pub async fn admin_mails(&self, auth: &AuthHeader) -> Result<Vec<Mail>> {
        self.mail_list_get("/admin/mails", auth).await
    }

    /// Deletes any mail in the system (admin only).
    ///
    /// # Errors
    ///
    /// Returns an error if the caller lacks the admin role.
    pub async fn admin_delete_mail(&self, auth: &AuthHeader, id: MailId) -> Result<()> {
        debug!(%id, "admin delete mail");
        let response = self
            .http
            .delete(self.url(&format!("/admin/mails/{id}")))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }

    async fn mail_list_get(&self, path: &str, auth: &AuthHeader) -> Result<Vec<Mail>> {
        let response = self
            .http
            .get(self.url(path))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .send()
            .await?;
        let response = expect_success(response).await?;
        let list: MailListResponse = response.json().await?;
        Ok(list.mails)
    }

    async fn empty_post(&self, path: &str, auth: &AuthHeader) -> Result<()> {
        debug!(path, "mail transition request");
        let response = self
            .http
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, auth.value())
            .json(&json!({}))
            .send()
            .await?;
        expect_success(response).await.map(drop)
    }
}

/// Turns a non-success response into [`ApiError::Status`], keeping the
/// server's `{"message": ...}` body when it has one.
async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.message);

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_header_value() {
        let header = AuthHeader::basic("YWxpY2U6cGFzcw==");
        assert_eq!(header.value(), "Basic YWxpY2U6cGFzcw==");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8081/api/v1/");
        assert_eq!(client.url("/login"), "http://localhost:8081/api/v1/login");
    }

    #[test]
    fn test_mail_paths_embed_id() {
        let client = ApiClient::new("http://localhost:8081/api/v1");
        let id = MailId(42);
        assert_eq!(
            client.url(&format!("/mail/{id}/archive")),
            "http://localhost:8081/api/v1/mail/42/archive"
        );
    }
}
