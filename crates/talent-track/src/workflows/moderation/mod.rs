//! Admin moderation: block/unblock/delete and platform counters.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{CompanyOverview, PlatformStats};
pub use router::moderation_router;
pub use service::{ModerationError, ModerationService};
