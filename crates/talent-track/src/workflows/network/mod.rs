//! The consultant-employer access workflow: request/grant/approve/reject
//! and the network listings both sides browse.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ConsultantLink, ConsultantSummary, EngagementNote, LinkId, LinkStatus, LinkView,
};
pub use router::network_router;
pub use service::{NetworkError, NetworkService};
