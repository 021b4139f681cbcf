use serde::Serialize;

use crate::workflows::directory::domain::CompanyId;

/// Admin listing row for a registered company. The contact email is the
/// first member's email, when the company has members.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyOverview {
    pub id: CompanyId,
    pub name: String,
    pub kind: &'static str,
    pub status: &'static str,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Platform-wide counters for the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformStats {
    pub total_users: usize,
    pub registered_companies: usize,
    pub blocked_entities: usize,
    pub active_jobs: usize,
    pub total_applications: usize,
}
