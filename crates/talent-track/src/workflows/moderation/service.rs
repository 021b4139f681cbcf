use std::sync::Arc;

use super::domain::{CompanyOverview, PlatformStats};
use crate::store::{ApplicationStore, CompanyStore, JobStore, StoreError, UserStore};
use crate::workflows::directory::domain::{AccountStatus, CompanyId, UserId, UserSummary};
use crate::workflows::jobs::domain::JobStatus;

/// Admin moderation: activity toggles, removals, listings, and platform
/// counters. Status toggles never cascade between companies and their
/// members.
pub struct ModerationService {
    users: Arc<dyn UserStore>,
    companies: Arc<dyn CompanyStore>,
    jobs: Arc<dyn JobStore>,
    applications: Arc<dyn ApplicationStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ModerationService {
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

    pub fn block_user(&self, user_id: UserId) -> Result<(), ModerationError> {
        self.set_user_status(user_id, AccountStatus::Blocked)
    }

    pub fn unblock_user(&self, user_id: UserId) -> Result<(), ModerationError> {
        self.set_user_status(user_id, AccountStatus::Active)
    }

    pub fn delete_user(&self, user_id: UserId) -> Result<(), ModerationError> {
        match self.users.delete(user_id) {
            Ok(()) | Err(StoreError::NotFound) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn block_company(&self, company_id: CompanyId) -> Result<(), ModerationError> {
        self.set_company_status(company_id, AccountStatus::Blocked)
    }

    pub fn unblock_company(&self, company_id: CompanyId) -> Result<(), ModerationError> {
        self.set_company_status(company_id, AccountStatus::Active)
    }

    pub fn delete_company(&self, company_id: CompanyId) -> Result<(), ModerationError> {
        match self.companies.delete(company_id) {
            Ok(()) | Err(StoreError::NotFound) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn users(&self) -> Result<Vec<UserSummary>, ModerationError> {
        let users = self.users.all()?;
        let mut rows = Vec::with_capacity(users.len());
        for user in &users {
            let company_name = match user.company_id {
                Some(company_id) => self.companies.get(company_id)?.map(|company| company.name),
                None => None,
            };
            rows.push(UserSummary {
                id: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                role: user.role.label(),
                status: user.status.label(),
                company_name,
            });
        }
        Ok(rows)
    }

    pub fn companies(&self) -> Result<Vec<CompanyOverview>, ModerationError> {
        let companies = self.companies.all()?;
        let users = self.users.all()?;
        Ok(companies
            .into_iter()
            .map(|company| {
                let contact_email = users
                    .iter()
                    .find(|user| user.company_id == Some(company.id))
                    .map(|user| user.email.clone());
                CompanyOverview {
                    id: company.id,
                    name: company.name,
                    kind: company.kind.label(),
                    status: company.status.label(),
                    location: company.location,
                    contact_email,
                }
            })
            .collect())
    }

    pub fn platform_stats(&self) -> Result<PlatformStats, ModerationError> {
        let users = self.users.all()?;
        let companies = self.companies.all()?;
        let jobs = self.jobs.all()?;
        let applications = self.applications.all()?;

        let blocked_entities = users
            .iter()
            .filter(|user| user.status == AccountStatus::Blocked)
            .count()
            + companies
                .iter()
                .filter(|company| company.status == AccountStatus::Blocked)
                .count();

        Ok(PlatformStats {
            total_users: users.len(),
            registered_companies: companies.len(),
            blocked_entities,
            active_jobs: jobs
                .iter()
                .filter(|job| job.status == JobStatus::Open)
                .count(),
            total_applications: applications.len(),
        })
    }

    fn set_user_status(
        &self,
        user_id: UserId,
        status: AccountStatus,
    ) -> Result<(), ModerationError> {
        if let Some(mut user) = self.users.get(user_id)? {
            user.status = status;
            self.users.update(user)?;
        }
        Ok(())
    }

    fn set_company_status(
        &self,
        company_id: CompanyId,
        status: AccountStatus,
    ) -> Result<(), ModerationError> {
        if let Some(mut company) = self.companies.get(company_id)? {
            company.status = status;
            self.companies.update(company)?;
        }
        Ok(())
    }
}
