//! Application lifecycle: apply, shortlist/reject, and interview capture.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationView, InterviewDetails,
    InterviewForm, InterviewView,
};
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError};
