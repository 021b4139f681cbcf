use serde::Serialize;

/// Role-shaped dashboard counters. Each variant carries only the figures
/// that role's home screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DashboardStats {
    Seeker {
        jobs_applied: usize,
        interviews: usize,
        shortlisted: usize,
    },
    Employer {
        active_posts: usize,
        total_company_jobs: usize,
        pending_review: usize,
    },
    Consultant {
        active_posts: usize,
        total_jobs: usize,
        pending_review: usize,
    },
    Admin {
        total_users: usize,
        registered_companies: usize,
        blocked_entities: usize,
    },
}
