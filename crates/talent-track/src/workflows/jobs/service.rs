use std::sync::Arc;

use chrono::Utc;

use super::domain::{Job, JobDraft, JobId, JobStatus, JobView};
use super::matching;
use crate::store::{ApplicationStore, CompanyStore, JobStore, StoreError, UserStore};
use crate::workflows::directory::domain::{CompanyId, UserId, UserRole};

/// Posting, attribution, queries, and recommendation over the job board.
pub struct JobService {
    jobs: Arc<dyn JobStore>,
    companies: Arc<dyn CompanyStore>,
    users: Arc<dyn UserStore>,
    applications: Arc<dyn ApplicationStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("user not found")]
    PosterNotFound,
    #[error("Employer is required for consultant job posting")]
    EmployerRequired,
    #[error("Invalid employer selected")]
    InvalidEmployer,
    #[error("job not found")]
    JobNotFound,
    #[error("only the posting user may close a job")]
    NotPoster,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl JobService {
    pub fn new(
        jobs: Arc<dyn JobStore>,
        companies: Arc<dyn CompanyStore>,
        users: Arc<dyn UserStore>,
        applications: Arc<dyn ApplicationStore>,
    ) -> Self {
        Self {
            jobs,
            companies,
            users,
            applications,
        }
    }

    /// Post a job on behalf of `posting_user_id`.
    ///
    /// A consultant must name a client employer; the job is then attributed
    /// to both and its company is inherited from the employer's company,
    /// overriding any hint. Employers post directly under the hinted
    /// company.
    pub fn post_job(
        &self,
        draft: JobDraft,
        posting_user_id: UserId,
        company_hint: Option<CompanyId>,
    ) -> Result<JobView, JobServiceError> {
        let poster = self
            .users
            .get(posting_user_id)?
            .ok_or(JobServiceError::PosterNotFound)?;

        let mut company_id = company_hint;
        let mut consultant_id = None;
        let mut employer_id = None;

        if poster.role == UserRole::Consultant {
            let client_id = draft
                .employer_id
                .ok_or(JobServiceError::EmployerRequired)?;
            let employer = self
                .users
                .get(client_id)?
                .filter(|user| user.role == UserRole::Employer)
                .ok_or(JobServiceError::InvalidEmployer)?;

            consultant_id = Some(posting_user_id);
            employer_id = Some(client_id);
            company_id = employer.company_id;
        }

        let job = self.jobs.add(Job {
            id: 0,
            title: draft.title,
            company_id,
            posted_by: posting_user_id,
            consultant_id,
            employer_id,
            job_type: draft.job_type,
            location: draft.location,
            salary_range: draft.salary_range,
            experience: draft.experience,
            status: JobStatus::Open,
            skills: draft.skills,
            description: draft.description,
            created_at: Utc::now(),
        })?;

        Ok(self.view(&job, None)?)
    }

    /// Close a job. Only the posting user may close it; anyone else gets a
    /// distinct authorization error rather than the not-found signal.
    pub fn close_job(&self, job_id: JobId, requesting_user_id: UserId) -> Result<(), JobServiceError> {
        let mut job = self.jobs.get(job_id)?.ok_or(JobServiceError::JobNotFound)?;

        if job.posted_by != requesting_user_id {
            return Err(JobServiceError::NotPoster);
        }

        job.status = JobStatus::Closed;
        self.jobs.update(job)?;
        Ok(())
    }

    /// All jobs; when a viewer is given, their application status is
    /// attached per row.
    pub fn all_jobs(&self, viewer: Option<UserId>) -> Result<Vec<JobView>, JobServiceError> {
        let jobs = self.jobs.all()?;
        jobs.iter()
            .map(|job| self.view(job, viewer).map_err(JobServiceError::from))
            .collect()
    }

    pub fn job(&self, job_id: JobId) -> Result<Option<JobView>, JobServiceError> {
        match self.jobs.get(job_id)? {
            Some(job) => Ok(Some(self.view(&job, None)?)),
            None => Ok(None),
        }
    }

    pub fn by_company(&self, company_id: CompanyId) -> Result<Vec<JobView>, JobServiceError> {
        let jobs = self.jobs.by_company(company_id)?;
        jobs.iter()
            .map(|job| self.view(job, None).map_err(JobServiceError::from))
            .collect()
    }

    pub fn by_consultant(&self, consultant_id: UserId) -> Result<Vec<JobView>, JobServiceError> {
        let jobs = self.jobs.by_consultant(consultant_id)?;
        jobs.iter()
            .map(|job| self.view(job, None).map_err(JobServiceError::from))
            .collect()
    }

    /// Rank open jobs against the seeker's skills.
    ///
    /// An unknown user yields an empty list rather than an error. A seeker
    /// without skills gets the most recent open jobs, unranked beyond
    /// recency.
    pub fn recommended_jobs(&self, user_id: UserId) -> Result<Vec<JobView>, JobServiceError> {
        let Some(user) = self.users.get(user_id)? else {
            return Ok(Vec::new());
        };

        let mut open: Vec<Job> = self
            .jobs
            .all()?
            .into_iter()
            .filter(|job| job.status == JobStatus::Open)
            .collect();

        let wanted = matching::token_set(&user.profile.skills);
        if wanted.is_empty() {
            open.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            open.truncate(matching::RECOMMENDATION_LIMIT);
            return open
                .iter()
                .map(|job| self.view(job, Some(user_id)).map_err(JobServiceError::from))
                .collect();
        }

        let ranked = matching::rank_by_overlap(&wanted, open);
        ranked
            .iter()
            .map(|entry| {
                let mut view = self.view(&entry.job, Some(user_id))?;
                view.is_perfect_match = entry.is_perfect_match();
                Ok(view)
            })
            .collect()
    }

    fn view(&self, job: &Job, viewer: Option<UserId>) -> Result<JobView, StoreError> {
        let company_name = match job.company_id {
            Some(company_id) => self
                .companies
                .get(company_id)?
                .map(|company| company.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            None => "Unknown".to_string(),
        };

        let posted_by_name = self
            .users
            .get(job.posted_by)?
            .map(|user| user.name)
            .unwrap_or_else(|| "Unknown".to_string());

        let employer_name = match job.employer_id {
            Some(employer_id) => self
                .users
                .get(employer_id)?
                .map(|user| user.name)
                .unwrap_or_default(),
            None => String::new(),
        };

        let application_status = match viewer {
            Some(viewer_id) => self
                .applications
                .for_job_and_applicant(job.id, viewer_id)?
                .map(|application| application.status.label()),
            None => None,
        };

        Ok(JobView {
            id: job.id,
            title: job.title.clone(),
            company_id: job.company_id,
            company_name,
            job_type: job.job_type.clone(),
            location: job.location.clone(),
            salary_range: job.salary_range.clone(),
            experience: job.experience.clone(),
            status: job.status.label(),
            skills: job.skills.clone(),
            description: job.description.clone(),
            posted_by: job.posted_by,
            posted_by_name,
            created_at: job.created_at,
            consultant_id: job.consultant_id,
            employer_id: job.employer_id,
            employer_name,
            application_status,
            is_perfect_match: false,
        })
    }
}
