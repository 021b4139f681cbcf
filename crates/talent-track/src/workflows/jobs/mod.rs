//! Job posting, the consultant attribution chain, queries, and the
//! skill-overlap recommendation ranking.

pub mod domain;
pub mod matching;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Job, JobDraft, JobId, JobStatus, JobView};
pub use matching::{PERFECT_MATCH_THRESHOLD, RECOMMENDATION_LIMIT};
pub use router::job_router;
pub use service::{JobService, JobServiceError};
