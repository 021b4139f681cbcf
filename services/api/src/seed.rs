//! Startup demo data: one account per role, two companies, a pair of open
//! jobs, and an approved consultant link, so a fresh instance is browsable
//! immediately.

use chrono::Utc;
use talent_track::store::{
    CompanyStore, ConsultantLinkStore, JobStore, MemoryStore, StoreError, UserStore,
};
use talent_track::workflows::directory::domain::{
    AccountStatus, Company, CompanyId, CompanyType, SeekerProfile, User, UserRole,
};
use talent_track::workflows::directory::password::{hash_password, PasswordError};
use talent_track::workflows::jobs::domain::{Job, JobStatus};
use talent_track::workflows::network::domain::{ConsultantLink, LinkStatus};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub(crate) enum SeedError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

fn demo_user(
    name: &str,
    role: UserRole,
    company_id: Option<CompanyId>,
    skills: &[&str],
    password: &str,
) -> Result<User, SeedError> {
    Ok(User {
        id: 0,
        name: name.to_string(),
        username: name.to_lowercase().replace(' ', "."),
        email: format!("{}@talenttrack.dev", name.to_lowercase().replace(' ', ".")),
        password_hash: hash_password(password)?,
        role,
        status: AccountStatus::Active,
        company_id,
        profile: SeekerProfile {
            skills: skills.iter().map(|skill| skill.to_string()).collect(),
            ..SeekerProfile::default()
        },
        created_at: Utc::now(),
    })
}

fn demo_company(name: &str, kind: CompanyType, location: &str) -> Company {
    Company {
        id: 0,
        name: name.to_string(),
        kind,
        status: AccountStatus::Active,
        location: location.to_string(),
        description: String::new(),
    }
}

pub(crate) fn seed_demo_data(store: &MemoryStore) -> Result<(), SeedError> {
    UserStore::add(
        store,
        demo_user("Admin", UserRole::Admin, None, &[], "admin123")?,
    )?;

    let acme = CompanyStore::add(
        store,
        demo_company("Acme Software", CompanyType::Employer, "Des Moines"),
    )?;
    let employer = UserStore::add(
        store,
        demo_user("Bea Keller", UserRole::Employer, Some(acme.id), &[], "employer123")?,
    )?;

    let agency = CompanyStore::add(
        store,
        demo_company("TalentWorks", CompanyType::Consultancy, "Chicago"),
    )?;
    let consultant = UserStore::add(
        store,
        demo_user(
            "Cid Alvarez",
            UserRole::Consultant,
            Some(agency.id),
            &[],
            "consultant123",
        )?,
    )?;

    UserStore::add(
        store,
        demo_user(
            "Ada Moreno",
            UserRole::Seeker,
            None,
            &["React", "Node", "SQL"],
            "seeker123",
        )?,
    )?;

    for (title, skills) in [
        ("Frontend Developer", vec!["React", "TypeScript", "CSS"]),
        ("Backend Developer", vec!["Node", "SQL", "AWS"]),
    ] {
        JobStore::add(
            store,
            Job {
                id: 0,
                title: title.to_string(),
                company_id: Some(acme.id),
                posted_by: employer.id,
                consultant_id: None,
                employer_id: None,
                job_type: "Full-time".to_string(),
                location: "Remote".to_string(),
                salary_range: "8-14 LPA".to_string(),
                experience: "2+ years".to_string(),
                status: JobStatus::Open,
                skills: skills.into_iter().map(str::to_string).collect(),
                description: "Join the Acme platform team.".to_string(),
                created_at: Utc::now(),
            },
        )?;
    }

    let now = Utc::now();
    ConsultantLinkStore::add(
        store,
        ConsultantLink {
            id: 0,
            employer_id: employer.id,
            consultant_id: consultant.id,
            status: LinkStatus::Approved,
            date_requested: now,
            date_actioned: Some(now),
            note: None,
        },
    )?;

    info!("seeded demo accounts, companies, and jobs");
    Ok(())
}
