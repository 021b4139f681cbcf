//! Integration coverage for moderation, dashboards, and complaints.

use std::sync::Arc;

use talent_track::store::MemoryStore;
use talent_track::workflows::applications::{ApplicationService, InterviewForm};
use talent_track::workflows::complaints::{ComplaintError, ComplaintRequest, ComplaintService};
use talent_track::workflows::dashboard::{DashboardService, DashboardStats};
use talent_track::workflows::directory::{
    AccountError, AccountService, AuthSession, LoginRequest, RegistrationRequest,
};
use talent_track::workflows::jobs::{JobDraft, JobService};
use talent_track::workflows::moderation::ModerationService;
use talent_track::workflows::notifications::NotificationService;

struct Platform {
    accounts: AccountService,
    jobs: JobService,
    applications: ApplicationService,
    moderation: ModerationService,
    dashboard: DashboardService,
    complaints: ComplaintService,
}

fn platform() -> Platform {
    let store = Arc::new(MemoryStore::new());
    let notifications = Arc::new(NotificationService::new(store.clone()));
    Platform {
        accounts: AccountService::new(store.clone(), store.clone()),
        jobs: JobService::new(store.clone(), store.clone(), store.clone(), store.clone()),
        applications: ApplicationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            notifications,
        ),
        moderation: ModerationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        ),
        dashboard: DashboardService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
        ),
        complaints: ComplaintService::new(store),
    }
}

fn register(platform: &Platform, name: &str, role: &str, company: Option<&str>) -> AuthSession {
    platform
        .accounts
        .register(RegistrationRequest {
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "s3cret-pw".to_string(),
            role: role.to_string(),
            company_name: company.map(str::to_string),
            company_type: None,
            skills: Vec::new(),
            address: None,
            city: None,
            state: None,
            pin_code: None,
            phone: None,
            date_of_birth: None,
            qualification: None,
            experience_years: None,
        })
        .expect("registration succeeds")
}

#[test]
fn blocking_a_company_does_not_block_its_members() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some("Acme"));
    let company_id = employer.company_id.expect("company linked");

    platform
        .moderation
        .block_company(company_id)
        .expect("company blocked");

    // The member still logs in: status toggles never cascade.
    platform
        .accounts
        .login(LoginRequest {
            identifier: "bea".to_string(),
            password: "s3cret-pw".to_string(),
            role: None,
        })
        .expect("member unaffected");

    let companies = platform.moderation.companies().expect("company listing");
    assert_eq!(companies[0].status, "blocked");
    assert_eq!(companies[0].contact_email.as_deref(), Some("bea@example.com"));
}

#[test]
fn blocked_user_is_locked_out_until_unblocked() {
    let platform = platform();
    let seeker = register(&platform, "Ada", "Seeker", None);

    platform
        .moderation
        .block_user(seeker.user_id)
        .expect("user blocked");
    match platform.accounts.login(LoginRequest {
        identifier: "ada".to_string(),
        password: "s3cret-pw".to_string(),
        role: None,
    }) {
        Err(AccountError::AccountBlocked) => {}
        other => panic!("expected blocked account, got {other:?}"),
    }

    platform
        .moderation
        .unblock_user(seeker.user_id)
        .expect("user unblocked");
    platform
        .accounts
        .login(LoginRequest {
            identifier: "ada".to_string(),
            password: "s3cret-pw".to_string(),
            role: None,
        })
        .expect("login after unblock");
}

#[test]
fn platform_stats_count_the_whole_board() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some("Acme"));
    let seeker = register(&platform, "Ada", "Seeker", None);
    register(&platform, "Root", "Admin", None);

    let job = platform
        .jobs
        .post_job(
            JobDraft {
                title: "Dev".to_string(),
                ..JobDraft::default()
            },
            employer.user_id,
            employer.company_id,
        )
        .expect("job posted");
    platform
        .applications
        .apply(job.id, seeker.user_id)
        .expect("application");
    platform
        .moderation
        .block_user(seeker.user_id)
        .expect("blocked");

    let stats = platform.moderation.platform_stats().expect("stats");
    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.registered_companies, 1);
    assert_eq!(stats.blocked_entities, 1);
    assert_eq!(stats.active_jobs, 1);
    assert_eq!(stats.total_applications, 1);
}

#[test]
fn dashboards_are_shaped_by_role() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some("Acme"));
    let seeker = register(&platform, "Ada", "Seeker", None);
    let admin = register(&platform, "Root", "Admin", None);

    let job = platform
        .jobs
        .post_job(
            JobDraft {
                title: "Dev".to_string(),
                ..JobDraft::default()
            },
            employer.user_id,
            employer.company_id,
        )
        .expect("job posted");
    let application = platform
        .applications
        .apply(job.id, seeker.user_id)
        .expect("application");

    match platform.dashboard.stats(employer.user_id).expect("stats") {
        DashboardStats::Employer {
            active_posts,
            total_company_jobs,
            pending_review,
        } => {
            assert_eq!(active_posts, 1);
            assert_eq!(total_company_jobs, 1);
            assert_eq!(pending_review, 1);
        }
        other => panic!("expected employer stats, got {other:?}"),
    }

    platform
        .applications
        .update_status(
            application.id,
            "Shortlisted",
            Some(InterviewForm {
                date: "2025-01-10".to_string(),
                ..InterviewForm::default()
            }),
        )
        .expect("shortlisted");

    match platform.dashboard.stats(seeker.user_id).expect("stats") {
        DashboardStats::Seeker {
            jobs_applied,
            interviews,
            shortlisted,
        } => {
            assert_eq!(jobs_applied, 1);
            assert_eq!(interviews, 1);
            assert_eq!(shortlisted, 1);
        }
        other => panic!("expected seeker stats, got {other:?}"),
    }

    match platform.dashboard.stats(admin.user_id).expect("stats") {
        DashboardStats::Admin {
            total_users,
            registered_companies,
            ..
        } => {
            assert_eq!(total_users, 3);
            assert_eq!(registered_companies, 1);
        }
        other => panic!("expected admin stats, got {other:?}"),
    }
}

#[test]
fn consultant_dashboard_tracks_attributed_jobs() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some("Acme"));
    let consultant = register(&platform, "Cid", "Consultant", None);
    let seeker = register(&platform, "Ada", "Seeker", None);

    let job = platform
        .jobs
        .post_job(
            JobDraft {
                title: "Dev".to_string(),
                employer_id: Some(employer.user_id),
                ..JobDraft::default()
            },
            consultant.user_id,
            None,
        )
        .expect("consultant posts");
    platform
        .applications
        .apply(job.id, seeker.user_id)
        .expect("application");

    match platform.dashboard.stats(consultant.user_id).expect("stats") {
        DashboardStats::Consultant {
            active_posts,
            total_jobs,
            pending_review,
        } => {
            assert_eq!(active_posts, 1);
            assert_eq!(total_jobs, 1);
            assert_eq!(pending_review, 1);
        }
        other => panic!("expected consultant stats, got {other:?}"),
    }
}

#[test]
fn complaint_lifecycle() {
    let platform = platform();
    let seeker = register(&platform, "Ada", "Seeker", None);

    let complaint = platform
        .complaints
        .submit(ComplaintRequest {
            submitted_by: seeker.user_id,
            kind: "Spam posting".to_string(),
            description: "The same job is posted ten times.".to_string(),
        })
        .expect("complaint submitted");
    assert_eq!(complaint.status, "pending");

    // Unknown status text is ignored.
    platform
        .complaints
        .update_status(complaint.id, "escalated")
        .expect("unknown status ignored");
    assert_eq!(platform.complaints.all().expect("listing")[0].status, "pending");

    platform
        .complaints
        .update_status(complaint.id, "Resolved")
        .expect("resolution");
    assert_eq!(
        platform.complaints.all().expect("listing")[0].status,
        "resolved"
    );

    match platform.complaints.update_status(999, "Resolved") {
        Err(ComplaintError::NotFound) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}
