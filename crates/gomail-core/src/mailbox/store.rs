//! The mailbox store: per-folder cache plus fetch and mutation against the
//! remote service.
//!
//! Policy throughout: the remote is the source of truth. No optimistic
//! local mutation — a cache slice changes only once the server has
//! confirmed the transition, so the user is never shown a state the server
//! rejected. Failures surface through the notification channel, preferring
//! the server-provided message over a generic fallback.

use std::collections::HashMap;

use gomail_api::{ApiError, AuthHeader, Mail, MailId, Outgoing};
use tracing::{debug, warn};

use super::Folder;
use super::compose::{ComposeError, parse_receivers};
use super::scope::ViewScope;
use crate::clock::Clock;
use crate::gateway::MailGateway;
use crate::notify::NotificationChannel;

/// Marker for one initiated fetch of one folder.
///
/// A completing fetch is only applied if no newer fetch for the same folder
/// has started since its ticket was issued.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    folder: Folder,
    generation: u64,
}

/// What became of a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The cache now holds the fetched list.
    Applied,
    /// The remote call failed; the cache is unchanged and a notification
    /// was pushed.
    Failed,
    /// A newer fetch for the same folder started meanwhile; this result was
    /// discarded.
    Stale,
    /// The observing view went away; this result was dropped silently.
    Cancelled,
}

/// Outcome of a send that made it past local validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The service accepted the mail; compose fields may be cleared.
    Sent,
    /// The service rejected the mail; a notification was pushed.
    Rejected,
}

/// Per-item outcomes of a batch purge.
///
/// Partial success is representable: every confirmed deletion is listed
/// even when others failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeReport {
    /// Items whose deletion the server confirmed.
    pub purged: Vec<MailId>,
    /// Items whose deletion failed.
    pub failed: Vec<MailId>,
}

impl PurgeReport {
    /// Whether every requested deletion was confirmed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Per-folder cache of mail entries, owning fetch and mutation.
///
/// One instance per view session; discard it on navigation away. List order
/// is server response order.
#[derive(Debug)]
pub struct MailboxStore<G: MailGateway> {
    gateway: G,
    cache: HashMap<Folder, Vec<Mail>>,
    generations: HashMap<Folder, u64>,
}

impl<G: MailGateway> MailboxStore<G> {
    /// Creates an empty store over the given gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            cache: HashMap::new(),
            generations: HashMap::new(),
        }
    }

    /// The cached list for `folder`, in server order. Empty until fetched.
    #[must_use]
    pub fn folder(&self, folder: Folder) -> &[Mail] {
        self.cache.get(&folder).map_or(&[], Vec::as_slice)
    }

    /// Marks the start of a fetch for `folder`.
    ///
    /// Every new ticket invalidates all earlier ones for the same folder,
    /// which is what lets the most recently initiated fetch win regardless
    /// of completion order.
    pub fn begin_fetch(&mut self, folder: Folder) -> FetchTicket {
        let generation = self.generations.entry(folder).or_insert(0);
        *generation += 1;
        FetchTicket {
            folder,
            generation: *generation,
        }
    }

    /// Reconciles a completed fetch into the cache.
    ///
    /// Cancelled scopes and superseded tickets are dropped without touching
    /// the cache or the notification channel. A failed fetch leaves the
    /// cache unchanged and pushes one notification.
    pub fn apply_fetch(
        &mut self,
        scope: &ViewScope,
        ticket: FetchTicket,
        result: gomail_api::Result<Vec<Mail>>,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> FetchOutcome {
        if scope.is_cancelled() {
            debug!(folder = %ticket.folder, "dropping fetch result for cancelled view");
            return FetchOutcome::Cancelled;
        }

        let current = self.generations.get(&ticket.folder).copied().unwrap_or(0);
        if ticket.generation != current {
            debug!(folder = %ticket.folder, "discarding superseded fetch result");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(mails) => {
                debug!(folder = %ticket.folder, count = mails.len(), "folder cache replaced");
                self.cache.insert(ticket.folder, mails);
                FetchOutcome::Applied
            }
            Err(e) => {
                notify_failure(
                    notify,
                    &e,
                    &format!("Failed to load {}", ticket.folder),
                );
                FetchOutcome::Failed
            }
        }
    }

    /// Fetches `folder` and reconciles the result.
    pub async fn fetch(
        &mut self,
        scope: &ViewScope,
        auth: &AuthHeader,
        folder: Folder,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> FetchOutcome {
        let ticket = self.begin_fetch(folder);
        let result = self.gateway.list(auth, folder).await;
        self.apply_fetch(scope, ticket, result, notify)
    }

    /// Moves a mail to trash.
    ///
    /// The item leaves the local inbox cache only on confirmed success.
    /// Returns whether the transition was confirmed.
    pub async fn archive(
        &mut self,
        auth: &AuthHeader,
        id: MailId,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> bool {
        match self.gateway.archive(auth, id).await {
            Ok(()) => {
                debug!(%id, "mail archived");
                self.remove_cached(Folder::Inbox, id);
                true
            }
            Err(e) => {
                notify_failure(notify, &e, "Failed to archive mail");
                false
            }
        }
    }

    /// Restores a trashed mail to the inbox.
    ///
    /// The item leaves the local trash cache only on confirmed success.
    /// Returns whether the transition was confirmed.
    pub async fn unarchive(
        &mut self,
        auth: &AuthHeader,
        id: MailId,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> bool {
        match self.gateway.unarchive(auth, id).await {
            Ok(()) => {
                debug!(%id, "mail restored from trash");
                self.remove_cached(Folder::Trash, id);
                true
            }
            Err(e) => {
                notify_failure(notify, &e, "Failed to restore mail");
                false
            }
        }
    }

    /// Permanently deletes one trashed mail, then refetches trash.
    ///
    /// After a destructive operation the remote is resynchronized rather
    /// than trusting local list surgery.
    pub async fn purge(
        &mut self,
        scope: &ViewScope,
        auth: &AuthHeader,
        id: MailId,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> FetchOutcome {
        if let Err(e) = self.gateway.purge(auth, id).await {
            notify_failure(notify, &e, "Failed to permanently delete mail");
            return FetchOutcome::Failed;
        }

        debug!(%id, "mail purged");
        self.fetch(scope, auth, Folder::Trash, notify).await
    }

    /// Permanently deletes every currently cached trash item.
    ///
    /// Each deletion is requested and settled individually; only confirmed
    /// items leave the cache, and a single aggregated notification reports
    /// the failure count when any failed. A cancelled scope stops the batch
    /// and drops the reconciliation.
    pub async fn purge_all(
        &mut self,
        scope: &ViewScope,
        auth: &AuthHeader,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> PurgeReport {
        let ids: Vec<MailId> = self.folder(Folder::Trash).iter().map(|m| m.id).collect();
        let total = ids.len();
        let mut report = PurgeReport::default();

        for id in ids {
            if scope.is_cancelled() {
                debug!("purge batch abandoned, view cancelled");
                return report;
            }
            match self.gateway.purge(auth, id).await {
                Ok(()) => report.purged.push(id),
                Err(e) => {
                    warn!(%id, "purge failed: {e}");
                    report.failed.push(id);
                }
            }
        }

        if scope.is_cancelled() {
            return report;
        }

        if let Some(trash) = self.cache.get_mut(&Folder::Trash) {
            trash.retain(|mail| !report.purged.contains(&mail.id));
        }

        if !report.is_complete() {
            notify.push(format!(
                "Failed to permanently delete {} of {total} messages",
                report.failed.len()
            ));
        }

        report
    }

    /// Sends a mail composed from raw form input.
    ///
    /// The receiver field is split on commas and trimmed; an empty result
    /// is a local validation failure and no network call is made. On
    /// confirmed success the caller should clear the compose fields.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::NoReceivers`] when the receiver input holds
    /// no addresses.
    pub async fn send(
        &mut self,
        auth: &AuthHeader,
        receivers_input: &str,
        subject: &str,
        body: &str,
        notify: &mut NotificationChannel<impl Clock>,
    ) -> Result<SendOutcome, ComposeError> {
        let receivers = parse_receivers(receivers_input);
        if receivers.is_empty() {
            return Err(ComposeError::NoReceivers);
        }

        let outgoing = Outgoing {
            receivers,
            subject: subject.to_string(),
            body: body.to_string(),
        };

        match self.gateway.send(auth, &outgoing).await {
            Ok(()) => {
                debug!(receivers = outgoing.receivers.len(), "mail sent");
                Ok(SendOutcome::Sent)
            }
            Err(e) => {
                notify_failure(notify, &e, "Failed to send mail");
                Ok(SendOutcome::Rejected)
            }
        }
    }

    fn remove_cached(&mut self, folder: Folder, id: MailId) {
        if let Some(mails) = self.cache.get_mut(&folder) {
            mails.retain(|mail| mail.id != id);
        }
    }
}

/// Pushes the server-provided message when present, the fallback otherwise.
fn notify_failure(
    notify: &mut NotificationChannel<impl Clock>,
    error: &ApiError,
    fallback: &str,
) {
    warn!("request failed: {error}");
    let message = error
        .server_message()
        .map_or_else(|| fallback.to_string(), str::to_string);
    notify.push(message);
}
