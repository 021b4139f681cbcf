//! Complaint intake and admin resolution.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{Complaint, ComplaintId, ComplaintRequest, ComplaintStatus, ComplaintView};
pub use router::complaint_router;
pub use service::{ComplaintError, ComplaintService};
