use std::sync::Arc;

use chrono::Utc;

use super::domain::{Complaint, ComplaintId, ComplaintRequest, ComplaintStatus, ComplaintView};
use crate::store::{ComplaintStore, StoreError};

pub struct ComplaintService {
    complaints: Arc<dyn ComplaintStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ComplaintError {
    #[error("complaint not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ComplaintService {
    pub fn new(complaints: Arc<dyn ComplaintStore>) -> Self {
        Self { complaints }
    }

    pub fn submit(&self, request: ComplaintRequest) -> Result<ComplaintView, ComplaintError> {
        let complaint = self.complaints.add(Complaint {
            id: 0,
            submitted_by: request.submitted_by,
            kind: request.kind,
            description: request.description,
            status: ComplaintStatus::Pending,
            date_submitted: Utc::now(),
        })?;
        Ok(ComplaintView::from(&complaint))
    }

    pub fn all(&self) -> Result<Vec<ComplaintView>, ComplaintError> {
        Ok(self
            .complaints
            .all()?
            .iter()
            .map(ComplaintView::from)
            .collect())
    }

    /// Resolve or reopen a complaint. Unknown status text is ignored; a
    /// missing complaint is an error, unlike the application workflow.
    pub fn update_status(&self, id: ComplaintId, status_text: &str) -> Result<(), ComplaintError> {
        let mut complaint = self.complaints.get(id)?.ok_or(ComplaintError::NotFound)?;

        if let Some(status) = ComplaintStatus::parse(status_text) {
            complaint.status = status;
            self.complaints.update(complaint)?;
        }
        Ok(())
    }
}
