//! Persistence seams for the workflow services.
//!
//! One trait per entity, each `Send + Sync` so services can hold them as
//! shared trait objects. `add` assigns the record identity and returns the
//! stored row. The pair-keyed stores (applications, consultant links)
//! enforce their uniqueness constraint at this layer: a duplicate key is a
//! [`StoreError::Conflict`], so the services' read-first checks cannot race
//! past it.

pub mod memory;

use crate::workflows::applications::domain::{Application, ApplicationId};
use crate::workflows::complaints::domain::{Complaint, ComplaintId};
use crate::workflows::directory::domain::{Company, CompanyId, User, UserId, UserRole};
use crate::workflows::jobs::domain::{Job, JobId};
use crate::workflows::network::domain::{ConsultantLink, LinkId};
use crate::workflows::notifications::domain::{Notification, NotificationId};

pub use memory::MemoryStore;

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait UserStore: Send + Sync {
    fn get(&self, id: UserId) -> Result<Option<User>, StoreError>;
    fn all(&self) -> Result<Vec<User>, StoreError>;
    /// Looks a user up by email or username.
    fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError>;
    fn by_role(&self, role: UserRole) -> Result<Vec<User>, StoreError>;
    fn add(&self, user: User) -> Result<User, StoreError>;
    fn update(&self, user: User) -> Result<(), StoreError>;
    fn delete(&self, id: UserId) -> Result<(), StoreError>;
}

pub trait CompanyStore: Send + Sync {
    fn get(&self, id: CompanyId) -> Result<Option<Company>, StoreError>;
    fn all(&self) -> Result<Vec<Company>, StoreError>;
    fn add(&self, company: Company) -> Result<Company, StoreError>;
    fn update(&self, company: Company) -> Result<(), StoreError>;
    fn delete(&self, id: CompanyId) -> Result<(), StoreError>;
}

pub trait JobStore: Send + Sync {
    fn get(&self, id: JobId) -> Result<Option<Job>, StoreError>;
    fn all(&self) -> Result<Vec<Job>, StoreError>;
    fn by_company(&self, company_id: CompanyId) -> Result<Vec<Job>, StoreError>;
    fn by_consultant(&self, consultant_id: UserId) -> Result<Vec<Job>, StoreError>;
    fn add(&self, job: Job) -> Result<Job, StoreError>;
    fn update(&self, job: Job) -> Result<(), StoreError>;
}

pub trait ApplicationStore: Send + Sync {
    fn get(&self, id: ApplicationId) -> Result<Option<Application>, StoreError>;
    fn all(&self) -> Result<Vec<Application>, StoreError>;
    fn by_job(&self, job_id: JobId) -> Result<Vec<Application>, StoreError>;
    fn by_applicant(&self, applicant_id: UserId) -> Result<Vec<Application>, StoreError>;
    fn for_job_and_applicant(
        &self,
        job_id: JobId,
        applicant_id: UserId,
    ) -> Result<Option<Application>, StoreError>;
    /// Inserts enforcing at most one application per (job, applicant).
    fn add(&self, application: Application) -> Result<Application, StoreError>;
    fn update(&self, application: Application) -> Result<(), StoreError>;
}

pub trait ConsultantLinkStore: Send + Sync {
    fn get(&self, id: LinkId) -> Result<Option<ConsultantLink>, StoreError>;
    fn for_pair(
        &self,
        employer_id: UserId,
        consultant_id: UserId,
    ) -> Result<Option<ConsultantLink>, StoreError>;
    fn by_employer(&self, employer_id: UserId) -> Result<Vec<ConsultantLink>, StoreError>;
    fn by_consultant(&self, consultant_id: UserId) -> Result<Vec<ConsultantLink>, StoreError>;
    /// Inserts enforcing at most one link per (employer, consultant).
    fn add(&self, link: ConsultantLink) -> Result<ConsultantLink, StoreError>;
    fn update(&self, link: ConsultantLink) -> Result<(), StoreError>;
    fn remove(&self, id: LinkId) -> Result<(), StoreError>;
}

pub trait ComplaintStore: Send + Sync {
    fn get(&self, id: ComplaintId) -> Result<Option<Complaint>, StoreError>;
    fn all(&self) -> Result<Vec<Complaint>, StoreError>;
    fn add(&self, complaint: Complaint) -> Result<Complaint, StoreError>;
    fn update(&self, complaint: Complaint) -> Result<(), StoreError>;
}

pub trait NotificationStore: Send + Sync {
    fn get(&self, id: NotificationId) -> Result<Option<Notification>, StoreError>;
    /// All notifications for a user, newest first.
    fn for_user(&self, user_id: UserId) -> Result<Vec<Notification>, StoreError>;
    fn add(&self, notification: Notification) -> Result<Notification, StoreError>;
    fn update(&self, notification: Notification) -> Result<(), StoreError>;
}
