//! Admin store: cached user and mail lists over the privileged endpoints.

use gomail_api::{AuthHeader, Mail, MailId, User, UserId};
use tracing::debug;

use crate::clock::Clock;
use crate::gateway::AdminGateway;
use crate::mailbox::ViewScope;
use crate::notify::NotificationChannel;

/// Cache of the admin-visible user and mail lists.
///
/// Deletion policy matches the mailbox store: an entry leaves the cache
/// only once the server confirms its removal; failures surface as one
/// notification and leave the cache untouched.
#[derive(Debug)]
pub struct AdminStore<G: AdminGateway> {
    gateway: G,
    users: Vec<User>,
    mails: Vec<Mail>,
}

impl<G: AdminGateway> AdminStore<G> {
    /// Creates an empty store over the given gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            users: Vec::new(),
            mails: Vec::new(),
        }
    }

    /// The cached user list. Empty until loaded.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The cached mail list. Empty until loaded.
    #[must_use]
    pub fn mails(&self) -> &[Mail] {
        &self.mails
    }

    /// Loads the user list, replacing the cache on success.
    ///
    /// Returns whether the cache was updated; failures leave it unchanged
    /// and push one notification, cancelled scopes drop the result.
    pub async fn load_users(
        &mut self,
        scope: &ViewScope,
        auth: &AuthHeader,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> bool {
        let result = self.gateway.users(auth).await;
        if scope.is_cancelled() {
            return false;
        }
        match result {
            Ok(users) => {
                debug!(count = users.len(), "admin user list loaded");
                self.users = users;
                true
            }
            Err(e) => {
                notify.push(
                    e.server_message()
                        .unwrap_or("Failed to load users")
                        .to_string(),
                );
                false
            }
        }
    }

    /// Loads the all-mail list, replacing the cache on success.
    ///
    /// Same policy as [`Self::load_users`].
    pub async fn load_mails(
        &mut self,
        scope: &ViewScope,
        auth: &AuthHeader,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> bool {
        let result = self.gateway.mails(auth).await;
        if scope.is_cancelled() {
            return false;
        }
        match result {
            Ok(mails) => {
                debug!(count = mails.len(), "admin mail list loaded");
                self.mails = mails;
                true
            }
            Err(e) => {
                notify.push(
                    e.server_message()
                        .unwrap_or("Failed to load mails")
                        .to_string(),
                );
                false
            }
        }
    }

    /// Deletes a user account; the cache entry goes only on confirmation.
    pub async fn delete_user(
        &mut self,
        auth: &AuthHeader,
        id: UserId,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> bool {
        match self.gateway.delete_user(auth, id).await {
            Ok(()) => {
                debug!(%id, "user deleted");
                self.users.retain(|user| user.id != id);
                true
            }
            Err(e) => {
                notify.push(
                    e.server_message()
                        .unwrap_or("Failed to delete user")
                        .to_string(),
                );
                false
            }
        }
    }

    /// Deletes a mail item; the cache entry goes only on confirmation.
    pub async fn delete_mail(
        &mut self,
        auth: &AuthHeader,
        id: MailId,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> bool {
        match self.gateway.delete_mail(auth, id).await {
            Ok(()) => {
                debug!(%id, "mail deleted by admin");
                self.mails.retain(|mail| mail.id != id);
                true
            }
            Err(e) => {
                notify.push(
                    e.server_message()
                        .unwrap_or("Failed to delete mail")
                        .to_string(),
                );
                false
            }
        }
    }
}
