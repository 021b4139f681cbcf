use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::directory::domain::UserId;

pub type ComplaintId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

impl ComplaintStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(ComplaintStatus::Pending),
            "resolved" => Some(ComplaintStatus::Resolved),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub submitted_by: UserId,
    pub kind: String,
    pub description: String,
    pub status: ComplaintStatus,
    pub date_submitted: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRequest {
    pub submitted_by: UserId,
    pub kind: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintView {
    pub id: ComplaintId,
    pub submitted_by: UserId,
    pub kind: String,
    pub description: String,
    pub status: &'static str,
    pub date_submitted: DateTime<Utc>,
}

impl From<&Complaint> for ComplaintView {
    fn from(complaint: &Complaint) -> Self {
        ComplaintView {
            id: complaint.id,
            submitted_by: complaint.submitted_by,
            kind: complaint.kind.clone(),
            description: complaint.description.clone(),
            status: complaint.status.label(),
            date_submitted: complaint.date_submitted,
        }
    }
}
