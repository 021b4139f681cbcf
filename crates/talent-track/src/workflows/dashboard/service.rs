use std::sync::Arc;

use super::domain::DashboardStats;
use crate::store::{ApplicationStore, CompanyStore, JobStore, StoreError, UserStore};
use crate::workflows::applications::domain::ApplicationStatus;
use crate::workflows::directory::domain::{AccountStatus, UserId, UserRole};
use crate::workflows::jobs::domain::{Job, JobStatus};

/// Per-role home-screen counters.
pub struct DashboardService {
    users: Arc<dyn UserStore>,
    companies: Arc<dyn CompanyStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("user not found")]
    UserNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DashboardService {
    pub fn new(
        users: Arc<dyn UserStore>,
        companies: Arc<dyn CompanyStore>,
        jobs: Arc<dyn JobStore>,
        applications: Arc<dyn ApplicationStore>,
    ) -> Self {
        Self {
            users,
            companies,
            jobs,
            applications,
        }
    }

    pub fn stats(&self, user_id: UserId) -> Result<DashboardStats, DashboardError> {
        let user = self
            .users
            .get(user_id)?
            .ok_or(DashboardError::UserNotFound)?;

        match user.role {
            UserRole::Seeker => {
                let applications = self.applications.by_applicant(user_id)?;
                Ok(DashboardStats::Seeker {
                    jobs_applied: applications.len(),
                    interviews: applications
                        .iter()
                        .filter(|application| application.interview.is_some())
                        .count(),
                    shortlisted: applications
                        .iter()
                        .filter(|application| {
                            application.status == ApplicationStatus::Shortlisted
                        })
                        .count(),
                })
            }
            UserRole::Employer => {
                let jobs = match user.company_id {
                    Some(company_id) => self.jobs.by_company(company_id)?,
                    None => Vec::new(),
                };
                let (active_posts, total, pending_review) = self.posting_figures(&jobs)?;
                Ok(DashboardStats::Employer {
                    active_posts,
                    total_company_jobs: total,
                    pending_review,
                })
            }
            UserRole::Consultant => {
                let jobs = self.jobs.by_consultant(user_id)?;
                let (active_posts, total, pending_review) = self.posting_figures(&jobs)?;
                Ok(DashboardStats::Consultant {
                    active_posts,
                    total_jobs: total,
                    pending_review,
                })
            }
            UserRole::Admin => {
                let users = self.users.all()?;
                let companies = self.companies.all()?;
                let blocked_entities = users
                    .iter()
                    .filter(|user| user.status == AccountStatus::Blocked)
                    .count()
                    + companies
                        .iter()
                        .filter(|company| company.status == AccountStatus::Blocked)
                        .count();
                Ok(DashboardStats::Admin {
                    total_users: users.len(),
                    registered_companies: companies.len(),
                    blocked_entities,
                })
            }
        }
    }

    fn posting_figures(&self, jobs: &[Job]) -> Result<(usize, usize, usize), DashboardError> {
        let active_posts = jobs
            .iter()
            .filter(|job| job.status == JobStatus::Open)
            .count();

        let mut pending_review = 0;
        for job in jobs {
            pending_review += self
                .applications
                .by_job(job.id)?
                .iter()
                .filter(|application| application.status == ApplicationStatus::Pending)
                .count();
        }

        Ok((active_posts, jobs.len(), pending_review))
    }
}
