use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::directory::domain::{CompanyId, UserId};

pub type JobId = u32;

/// Closing a job is terminal; there is no reopen transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
        }
    }
}

/// A posted job. For consultant-posted jobs `consultant_id` is the poster,
/// `employer_id` the client employer, and `company_id` is inherited from
/// that employer's company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company_id: Option<CompanyId>,
    pub posted_by: UserId,
    pub consultant_id: Option<UserId>,
    pub employer_id: Option<UserId>,
    pub job_type: String,
    pub location: String,
    pub salary_range: String,
    pub experience: String,
    pub status: JobStatus,
    pub skills: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Posting payload. `employer_id` is required when a consultant posts and
/// ignored otherwise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub employer_id: Option<UserId>,
}

/// Display model with company/poster/employer names resolved per row. The
/// name fields are lookup results, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct JobView {
    pub id: JobId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    pub company_name: String,
    pub job_type: String,
    pub location: String,
    pub salary_range: String,
    pub experience: String,
    pub status: &'static str,
    pub skills: Vec<String>,
    pub description: String,
    pub posted_by: UserId,
    pub posted_by_name: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultant_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_id: Option<UserId>,
    pub employer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<&'static str>,
    pub is_perfect_match: bool,
}
