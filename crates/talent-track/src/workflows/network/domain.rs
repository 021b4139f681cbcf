use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::directory::domain::UserId;

pub type LinkId = u32;

/// Link state per (employer, consultant) pair. Absence of a row is the
/// implicit initial state; Rejected can cycle back to Pending via a
/// re-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    Pending,
    Approved,
    Rejected,
}

impl LinkStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LinkStatus::Pending => "pending",
            LinkStatus::Approved => "approved",
            LinkStatus::Rejected => "rejected",
        }
    }
}

/// Structured requirement note attached to a grant or carried on a request
/// notification. The workflow imposes no schema on the field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementNote {
    pub fields: BTreeMap<String, String>,
}

impl EngagementNote {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for EngagementNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultantLink {
    pub id: LinkId,
    pub employer_id: UserId,
    pub consultant_id: UserId,
    pub status: LinkStatus,
    pub date_requested: DateTime<Utc>,
    pub date_actioned: Option<DateTime<Utc>>,
    pub note: Option<EngagementNote>,
}

/// One row of a network listing. `partner` is the consultant when listing
/// an employer's network and the employer when listing a consultant's
/// clients.
#[derive(Debug, Clone, Serialize)]
pub struct LinkView {
    pub id: LinkId,
    pub employer_id: UserId,
    pub consultant_id: UserId,
    pub partner_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_company: Option<String>,
    pub status: &'static str,
    pub date_requested: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_actioned: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<EngagementNote>,
}

/// Search result row for the consultant directory.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultantSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}
