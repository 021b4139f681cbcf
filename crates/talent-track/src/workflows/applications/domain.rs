use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::directory::domain::UserId;
use crate::workflows::jobs::domain::JobId;

pub type ApplicationId = u32;

/// Pending is the entry state; Shortlisted and Rejected are both terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(ApplicationStatus::Pending),
            "shortlisted" => Some(ApplicationStatus::Shortlisted),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// Interview data captured at shortlisting. Once attached it is never
/// cleared, even when the application is later rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewDetails {
    pub date: Option<NaiveDate>,
    pub time: String,
    pub location: String,
    pub link: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub notes: String,
}

impl InterviewDetails {
    /// Fallback used when an application is shortlisted without any details.
    pub fn default_slot(now: DateTime<Utc>) -> Self {
        InterviewDetails {
            date: Some((now + Duration::days(7)).date_naive()),
            time: "10:00 AM".to_string(),
            location: "Virtual".to_string(),
            link: "meet.google.com/abc-def-ghi".to_string(),
            ..InterviewDetails::default()
        }
    }
}

/// Interview payload from the employer side. The date is parsed leniently:
/// an unparseable value leaves the stored date unset while every other
/// field is copied verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub notes: String,
}

impl InterviewForm {
    pub fn into_details(self) -> InterviewDetails {
        InterviewDetails {
            date: NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok(),
            time: self.time,
            location: self.location,
            link: self.link,
            contact_person: self.contact_person,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub applicant_id: UserId,
    pub status: ApplicationStatus,
    pub date_applied: DateTime<Utc>,
    pub interview: Option<InterviewDetails>,
}

/// Interview sub-object as serialized in view models: date as `YYYY-MM-DD`
/// (empty string when unset), every other field verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewView {
    pub date: String,
    pub time: String,
    pub location: String,
    pub link: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub notes: String,
}

impl From<&InterviewDetails> for InterviewView {
    fn from(details: &InterviewDetails) -> Self {
        InterviewView {
            date: details
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            time: details.time.clone(),
            location: details.location.clone(),
            link: details.link.clone(),
            contact_person: details.contact_person.clone(),
            contact_email: details.contact_email.clone(),
            contact_phone: details.contact_phone.clone(),
            notes: details.notes.clone(),
        }
    }
}

/// Display model with job title, company name, and applicant resolved per
/// row ("Unknown" fallbacks when a referenced record is missing).
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub job_title: String,
    pub company_name: String,
    pub applicant_id: UserId,
    pub applicant_name: String,
    pub resume_ref: String,
    pub status: &'static str,
    pub date_applied: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview: Option<InterviewView>,
}
