//! Gateway traits at the wire seam.
//!
//! The stores and the session manager talk to the remote service through
//! these traits rather than a concrete HTTP client, so every state
//! transition is unit-testable against scripted gateways. `gomail-api`'s
//! [`ApiClient`] is the production implementation.

use gomail_api::{ApiClient, AuthHeader, Credentials, Mail, MailId, Outgoing, User, UserId};

use crate::mailbox::Folder;

/// Unauthenticated account operations.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Verifies credentials against the service.
    async fn login(&self, credentials: &Credentials) -> gomail_api::Result<()>;

    /// Registers a new account.
    async fn register(&self, credentials: &Credentials) -> gomail_api::Result<()>;
}

/// Authenticated mailbox operations.
#[allow(async_fn_in_trait)]
pub trait MailGateway {
    /// Lists the given folder, in server order.
    async fn list(&self, auth: &AuthHeader, folder: Folder) -> gomail_api::Result<Vec<Mail>>;

    /// Sends a new mail.
    async fn send(&self, auth: &AuthHeader, outgoing: &Outgoing) -> gomail_api::Result<()>;

    /// Moves a mail to trash.
    async fn archive(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()>;

    /// Restores a trashed mail.
    async fn unarchive(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()>;

    /// Permanently deletes a trashed mail.
    async fn purge(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()>;
}

/// Privileged operations over all users and all mail.
#[allow(async_fn_in_trait)]
pub trait AdminGateway {
    /// Lists all non-admin user accounts.
    async fn users(&self, auth: &AuthHeader) -> gomail_api::Result<Vec<User>>;

    /// Lists every mail in the system.
    async fn mails(&self, auth: &AuthHeader) -> gomail_api::Result<Vec<Mail>>;

    /// Deletes a user account.
    async fn delete_user(&self, auth: &AuthHeader, id: UserId) -> gomail_api::Result<()>;

    /// Deletes any mail in the system.
    async fn delete_mail(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()>;
}

impl<G: MailGateway> MailGateway for &G {
    async fn list(&self, auth: &AuthHeader, folder: Folder) -> gomail_api::Result<Vec<Mail>> {
        (**self).list(auth, folder).await
    }

    async fn send(&self, auth: &AuthHeader, outgoing: &Outgoing) -> gomail_api::Result<()> {
        (**self).send(auth, outgoing).await
    }

    async fn archive(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        (**self).archive(auth, id).await
    }

    async fn unarchive(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        (**self).unarchive(auth, id).await
    }

    async fn purge(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        (**self).purge(auth, id).await
    }
}

impl AuthGateway for ApiClient {
    async fn login(&self, credentials: &Credentials) -> gomail_api::Result<()> {
        self.login(credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> gomail_api::Result<()> {
        self.register(credentials).await
    }
}

impl MailGateway for ApiClient {
    async fn list(&self, auth: &AuthHeader, folder: Folder) -> gomail_api::Result<Vec<Mail>> {
        match folder {
            Folder::Inbox => self.inbox(auth).await,
            Folder::Sent => self.sent(auth).await,
            Folder::Trash => self.trash(auth).await,
        }
    }

    async fn send(&self, auth: &AuthHeader, outgoing: &Outgoing) -> gomail_api::Result<()> {
        self.send(auth, outgoing).await
    }

    async fn archive(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        self.archive(auth, id).await
    }

    async fn unarchive(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        self.unarchive(auth, id).await
    }

    async fn purge(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        self.purge(auth, id).await
    }
}

impl AdminGateway for ApiClient {
    async fn users(&self, auth: &AuthHeader) -> gomail_api::Result<Vec<User>> {
        self.admin_users(auth).await
    }

    async fn mails(&self, auth: &AuthHeader) -> gomail_api::Result<Vec<Mail>> {
        self.admin_mails(auth).await
    }

    async fn delete_user(&self, auth: &AuthHeader, id: UserId) -> gomail_api::Result<()> {
        self.admin_delete_user(auth, id).await
    }

    async fn delete_mail(&self, auth: &AuthHeader, id: MailId) -> gomail_api::Result<()> {
        self.admin_delete_mail(auth, id).await
    }
}
