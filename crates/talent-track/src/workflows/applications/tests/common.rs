use std::sync::Arc;

use chrono::Utc;

use crate::store::{CompanyStore, JobStore, MemoryStore, NotificationStore, UserStore};
use crate::workflows::applications::service::ApplicationService;
use crate::workflows::directory::domain::{
    AccountStatus, Company, CompanyId, CompanyType, SeekerProfile, User, UserId, UserRole,
};
use crate::workflows::jobs::domain::{Job, JobStatus};
use crate::workflows::notifications::domain::Notification;
use crate::workflows::notifications::service::NotificationService;

pub(super) fn build_service() -> (ApplicationService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(NotificationService::new(store.clone()));
    let service = ApplicationService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        notifier,
    );
    (service, store)
}

pub(super) fn add_user(store: &MemoryStore, name: &str, role: UserRole) -> User {
    UserStore::add(
        store,
        User {
            id: 0,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: String::new(),
            role,
            status: AccountStatus::Active,
            company_id: None,
            profile: SeekerProfile::default(),
            created_at: Utc::now(),
        },
    )
    .expect("user insert")
}

pub(super) fn add_company(store: &MemoryStore, name: &str) -> Company {
    CompanyStore::add(
        store,
        Company {
            id: 0,
            name: name.to_string(),
            kind: CompanyType::Employer,
            status: AccountStatus::Active,
            location: String::new(),
            description: String::new(),
        },
    )
    .expect("company insert")
}

pub(super) fn add_job(
    store: &MemoryStore,
    title: &str,
    posted_by: UserId,
    company_id: Option<CompanyId>,
) -> Job {
    JobStore::add(
        store,
        Job {
            id: 0,
            title: title.to_string(),
            company_id,
            posted_by,
            consultant_id: None,
            employer_id: None,
            job_type: "Full-time".to_string(),
            location: "Remote".to_string(),
            salary_range: String::new(),
            experience: String::new(),
            status: JobStatus::Open,
            skills: vec!["React".to_string(), "Node".to_string()],
            description: String::new(),
            created_at: Utc::now(),
        },
    )
    .expect("job insert")
}

pub(super) fn inbox(store: &MemoryStore, user_id: UserId) -> Vec<Notification> {
    store.for_user(user_id).expect("notification read")
}
