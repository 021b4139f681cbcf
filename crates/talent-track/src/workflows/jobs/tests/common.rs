use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::store::{CompanyStore, JobStore, MemoryStore, UserStore};
use crate::workflows::directory::domain::{
    AccountStatus, Company, CompanyId, CompanyType, SeekerProfile, User, UserId, UserRole,
};
use crate::workflows::jobs::domain::{Job, JobDraft, JobStatus};
use crate::workflows::jobs::service::JobService;

pub(super) fn build_service() -> (JobService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = JobService::new(store.clone(), store.clone(), store.clone(), store.clone());
    (service, store)
}

pub(super) fn add_user(
    store: &MemoryStore,
    name: &str,
    role: UserRole,
    company_id: Option<CompanyId>,
) -> User {
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
            company_id,
            profile: SeekerProfile::default(),
            created_at: Utc::now(),
        },
    )
    .expect("user insert")
}

pub(super) fn add_seeker_with_skills(store: &MemoryStore, name: &str, skills: &[&str]) -> User {
    let mut user = add_user(store, name, UserRole::Seeker, None);
    user.profile.skills = skills.iter().map(|skill| skill.to_string()).collect();
    UserStore::update(store, user.clone()).expect("user update");
    user
}

pub(super) fn add_company(store: &MemoryStore, name: &str) -> Company {
    CompanyStore::add(
        store,
        Company {
            id: 0,
            name: name.to_string(),
            kind: CompanyType::Employer,
            status: AccountStatus::Active,
            location: "Des Moines".to_string(),
            description: String::new(),
        },
    )
    .expect("company insert")
}

pub(super) fn draft(title: &str, skills: &[&str]) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        job_type: "Full-time".to_string(),
        location: "Remote".to_string(),
        salary_range: "8-12 LPA".to_string(),
        experience: "2+ years".to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        description: "Ship features.".to_string(),
        employer_id: None,
    }
}

/// Insert an open job directly, aged by `age_minutes` so ranking ties are
/// deterministic.
pub(super) fn add_open_job(
    store: &MemoryStore,
    title: &str,
    skills: &[&str],
    posted_by: UserId,
    age_minutes: i64,
) -> Job {
    JobStore::add(
        store,
        Job {
            id: 0,
            title: title.to_string(),
            company_id: None,
            posted_by,
            consultant_id: None,
            employer_id: None,
            job_type: "Full-time".to_string(),
            location: "Remote".to_string(),
            salary_range: String::new(),
            experience: String::new(),
            status: JobStatus::Open,
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            description: String::new(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        },
    )
    .expect("job insert")
}
