//! Reconciliation of local edits with the remote collection.
//!
//! `SyncGateway` maps mutation intents to remote calls and folds the
//! responses back into the working collection through store commands. Every
//! network failure is caught here: it becomes a notification plus a typed
//! error returned to the caller, and the local collection stays as it was.
//! There are no retries, no request deduplication and no cancellation; a
//! request runs to success or failure.

use uuid::Uuid;

use crate::error::{SyncError, SyncResult};
use crate::notify::{ConfirmDestructive, NotificationSink, Notice};
use crate::store::{Command, SequenceStore};

use super::client::SequenceClient;

/// Coordinates the working collection with the remote resource collection.
///
/// Notification display and destructive-action confirmation are injected, so
/// tests substitute deterministic stubs.
pub struct SyncGateway<N, C> {
    client: SequenceClient,
    notifier: N,
    confirm: C,
}

impl<N: NotificationSink, C: ConfirmDestructive> SyncGateway<N, C> {
    /// Creates a gateway over the given client and boundary capabilities.
    pub fn new(client: SequenceClient, notifier: N, confirm: C) -> Self {
        Self {
            client,
            notifier,
            confirm,
        }
    }

    /// Refetches the entire remote collection and replaces the local one.
    ///
    /// Full refresh, not a merge: unsaved local edits are discarded on
    /// success. On failure the collection is untouched.
    pub async fn fetch_all(&self, store: &mut SequenceStore) -> SyncResult<()> {
        let request_id = Uuid::new_v4();
        match self.client.fetch_all().await {
            Ok(sequences) => {
                tracing::debug!(%request_id, count = sequences.len(), "collection refreshed");
                store.apply(Command::FetchedAll(sequences))
            }
            Err(err) => {
                tracing::warn!(%request_id, error = %err, "collection fetch failed");
                self.notifier
                    .notify(Notice::Error, "Could not download sequences");
                Err(err)
            }
        }
    }

    /// Persists the sequence at `index`: create when it has no id, update
    /// scoped to its id otherwise.
    ///
    /// On success the working copy is replaced with the server's canonical
    /// response (capturing the assigned id, clearing dirty). On failure the
    /// local state is unchanged and the failure is reported, with per-field
    /// validation messages folded into the notification.
    pub async fn save(&self, store: &mut SequenceStore, index: usize) -> SyncResult<()> {
        let snapshot = store
            .get(index)
            .ok_or(SyncError::SequenceNotFound(index))?
            .clone();
        let label = snapshot.label().to_string();

        let request_id = Uuid::new_v4();
        let result = match snapshot.id {
            Some(id) => self.client.update(id, &snapshot).await,
            None => self.client.create(&snapshot).await,
        };

        match result {
            Ok(canonical) => {
                tracing::debug!(%request_id, id = ?canonical.id, "sequence persisted");
                store.apply(Command::Saved { index, canonical })?;
                self.notifier
                    .notify(Notice::Success, &format!("Saved '{}'", label));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%request_id, error = %err, "sequence save failed");
                self.notifier.notify(
                    Notice::Error,
                    &format!("Unable to save '{}': {}", label, err),
                );
                Err(err)
            }
        }
    }

    /// Deletes the sequence at `index`, resolved against the current
    /// snapshot of the working collection.
    ///
    /// A never-persisted sequence is removed locally with no network call.
    /// A persisted one requires confirmation first; declining is a silent
    /// no-op. A refused delete surfaces the server's reason verbatim and
    /// leaves the sequence in the collection.
    pub async fn delete(&self, store: &mut SequenceStore, index: usize) -> SyncResult<()> {
        let snapshot = store.get(index).ok_or(SyncError::SequenceNotFound(index))?;

        let id = match snapshot.id {
            // Never persisted: local removal only.
            None => return store.apply(Command::Deleted { index }),
            Some(id) => id,
        };

        if !self
            .confirm
            .confirm(&format!("Delete sequence '{}'?", snapshot.name))
        {
            return Ok(());
        }

        let request_id = Uuid::new_v4();
        match self.client.delete(id).await {
            Ok(()) => {
                tracing::debug!(%request_id, %id, "sequence deleted");
                store.apply(Command::Deleted { index })
            }
            Err(err) => {
                tracing::warn!(%request_id, %id, error = %err, "sequence delete failed");
                let message = match &err {
                    SyncError::Refused(reason) => reason.clone(),
                    _ => "Unable to delete sequence".to_string(),
                };
                self.notifier.notify(Notice::Error, &message);
                Err(err)
            }
        }
    }
}
