use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{Notification, NotificationId};
use crate::store::{NotificationStore, StoreError};
use crate::workflows::directory::domain::UserId;

/// Outbound notification seam consumed by the other workflows.
///
/// Deliveries are fire-and-forget: a failed notify must never roll back the
/// caller's primary operation. Callers go through [`notify_best_effort`].
pub trait NotificationSink: Send + Sync {
    fn notify(&self, user_id: UserId, text: &str) -> Result<(), NotifyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(#[from] StoreError),
}

/// Deliver a notification, logging instead of propagating on failure.
pub fn notify_best_effort(sink: &dyn NotificationSink, user_id: UserId, text: &str) {
    if let Err(err) = sink.notify(user_id, text) {
        warn!(user_id, error = %err, "dropping notification");
    }
}

/// Store-backed sink that also serves the inbox read side.
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// All notifications for a user, newest first.
    pub fn list(&self, user_id: UserId) -> Result<Vec<Notification>, StoreError> {
        self.store.for_user(user_id)
    }

    /// Idempotent read-flag flip; missing ids are ignored.
    pub fn mark_read(&self, id: NotificationId) -> Result<(), StoreError> {
        if let Some(mut notification) = self.store.get(id)? {
            if !notification.read {
                notification.read = true;
                self.store.update(notification)?;
            }
        }
        Ok(())
    }
}

impl NotificationSink for NotificationService {
    fn notify(&self, user_id: UserId, text: &str) -> Result<(), NotifyError> {
        self.store.add(Notification {
            id: 0,
            user_id,
            text: text.to_string(),
            time: Utc::now(),
            read: false,
        })?;
        Ok(())
    }
}
