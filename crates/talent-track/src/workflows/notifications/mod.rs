//! Fire-and-forget notification sink plus the per-user inbox.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{Notification, NotificationId};
pub use router::notification_router;
pub use service::{notify_best_effort, NotificationService, NotificationSink, NotifyError};
