use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, ApplicationView, InterviewDetails,
    InterviewForm, InterviewView,
};
use crate::store::{ApplicationStore, CompanyStore, JobStore, StoreError, UserStore};
use crate::workflows::directory::domain::UserId;
use crate::workflows::jobs::domain::JobId;
use crate::workflows::notifications::service::{notify_best_effort, NotificationSink};

/// Application lifecycle: apply, review, and interview capture.
pub struct ApplicationService {
    applications: Arc<dyn ApplicationStore>,
    jobs: Arc<dyn JobStore>,
    users: Arc<dyn UserStore>,
    companies: Arc<dyn CompanyStore>,
    notifier: Arc<dyn NotificationSink>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error("Already applied")]
    AlreadyApplied,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationService {
    pub fn new(
        applications: Arc<dyn ApplicationStore>,
        jobs: Arc<dyn JobStore>,
        users: Arc<dyn UserStore>,
        companies: Arc<dyn CompanyStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            applications,
            jobs,
            users,
            companies,
            notifier,
        }
    }

    /// Submit an application for a job. At most one application may exist
    /// per (job, applicant); the job's poster is notified best-effort.
    pub fn apply(
        &self,
        job_id: JobId,
        applicant_id: UserId,
    ) -> Result<ApplicationView, ApplicationServiceError> {
        if self
            .applications
            .for_job_and_applicant(job_id, applicant_id)?
            .is_some()
        {
            return Err(ApplicationServiceError::AlreadyApplied);
        }

        let application = match self.applications.add(Application {
            id: 0,
            job_id,
            applicant_id,
            status: ApplicationStatus::Pending,
            date_applied: Utc::now(),
            interview: None,
        }) {
            Ok(application) => application,
            // The store-level pair constraint closes the check-then-act
            // window left by the read above.
            Err(StoreError::Conflict) => return Err(ApplicationServiceError::AlreadyApplied),
            Err(err) => return Err(err.into()),
        };

        if let Some(job) = self.jobs.get(job_id)? {
            notify_best_effort(
                self.notifier.as_ref(),
                job.posted_by,
                &format!("New application received for job: {}", job.title),
            );
        }

        Ok(self.view(&application)?)
    }

    /// Move an application to a new status.
    ///
    /// A missing application or an unrecognized status string is a silent
    /// no-op. Shortlisting attaches the supplied interview details, or a
    /// default slot one week out when none exist yet; interview data is
    /// never cleared by later transitions.
    pub fn update_status(
        &self,
        application_id: ApplicationId,
        status_text: &str,
        interview: Option<InterviewForm>,
    ) -> Result<(), ApplicationServiceError> {
        let Some(mut application) = self.applications.get(application_id)? else {
            return Ok(());
        };
        let Some(status) = ApplicationStatus::parse(status_text) else {
            return Ok(());
        };

        application.status = status;

        if status == ApplicationStatus::Shortlisted {
            if let Some(form) = interview {
                application.interview = Some(form.into_details());
            } else if application.interview.is_none() {
                application.interview = Some(InterviewDetails::default_slot(Utc::now()));
            }
        }

        self.applications.update(application.clone())?;

        let job_title = self
            .jobs
            .get(application.job_id)?
            .map(|job| job.title)
            .unwrap_or_else(|| "a job".to_string());
        notify_best_effort(
            self.notifier.as_ref(),
            application.applicant_id,
            &format!(
                "Your application for {job_title} has been updated to: {}",
                status.label()
            ),
        );

        Ok(())
    }

    pub fn by_job(&self, job_id: JobId) -> Result<Vec<ApplicationView>, ApplicationServiceError> {
        let applications = self.applications.by_job(job_id)?;
        applications
            .iter()
            .map(|application| self.view(application).map_err(ApplicationServiceError::from))
            .collect()
    }

    pub fn by_applicant(
        &self,
        applicant_id: UserId,
    ) -> Result<Vec<ApplicationView>, ApplicationServiceError> {
        let applications = self.applications.by_applicant(applicant_id)?;
        applications
            .iter()
            .map(|application| self.view(application).map_err(ApplicationServiceError::from))
            .collect()
    }

    fn view(&self, application: &Application) -> Result<ApplicationView, StoreError> {
        let job = self.jobs.get(application.job_id)?;
        let mut job_title = "Unknown".to_string();
        let mut company_name = "Unknown".to_string();
        if let Some(job) = &job {
            job_title = job.title.clone();
            if let Some(company_id) = job.company_id {
                if let Some(company) = self.companies.get(company_id)? {
                    company_name = company.name;
                }
            }
        }

        let applicant = self.users.get(application.applicant_id)?;
        let applicant_name = applicant
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        let resume_ref = applicant
            .and_then(|user| user.profile.resume_ref)
            .unwrap_or_default();

        Ok(ApplicationView {
            id: application.id,
            job_id: application.job_id,
            job_title,
            company_name,
            applicant_id: application.applicant_id,
            applicant_name,
            resume_ref,
            status: application.status.label(),
            date_applied: application.date_applied,
            interview: application.interview.as_ref().map(InterviewView::from),
        })
    }
}
