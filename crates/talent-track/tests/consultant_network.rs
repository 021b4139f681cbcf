//! Integration coverage for the consultant-employer access workflow and
//! the attribution chain it enables.

use std::collections::BTreeMap;
use std::sync::Arc;

use talent_track::store::MemoryStore;
use talent_track::workflows::directory::{AccountService, AuthSession, RegistrationRequest};
use talent_track::workflows::jobs::{JobDraft, JobService};
use talent_track::workflows::network::{EngagementNote, NetworkService};
use talent_track::workflows::notifications::NotificationService;

struct Platform {
    accounts: AccountService,
    jobs: JobService,
    network: NetworkService,
    notifications: Arc<NotificationService>,
}

fn platform() -> Platform {
    let store = Arc::new(MemoryStore::new());
    let notifications = Arc::new(NotificationService::new(store.clone()));
    Platform {
        accounts: AccountService::new(store.clone(), store.clone()),
        jobs: JobService::new(store.clone(), store.clone(), store.clone(), store.clone()),
        network: NetworkService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            notifications.clone(),
        ),
        notifications,
    }
}

fn register(platform: &Platform, name: &str, role: &str, company: Option<(&str, &str)>) -> AuthSession {
    platform
        .accounts
        .register(RegistrationRequest {
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "s3cret-pw".to_string(),
            role: role.to_string(),
            company_name: company.map(|(company_name, _)| company_name.to_string()),
            company_type: company.map(|(_, kind)| kind.to_string()),
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

fn requirement_note() -> EngagementNote {
    let mut fields = BTreeMap::new();
    fields.insert("Role".to_string(), "Backend Engineer".to_string());
    fields.insert("Salary".to_string(), "12 LPA".to_string());
    EngagementNote { fields }
}

#[test]
fn request_reject_rerequest_approve_then_post_on_behalf() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some(("Acme", "Employer")));
    let consultant = register(
        &platform,
        "Cid",
        "Consultant",
        Some(("TalentWorks", "Consultancy")),
    );

    platform
        .network
        .request_access(
            employer.user_id,
            consultant.user_id,
            Some(requirement_note()),
        )
        .expect("request sent");

    let clients = platform
        .network
        .consultant_clients(consultant.user_id)
        .expect("client listing");
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].status, "pending");
    assert_eq!(clients[0].partner_name, "Bea");
    assert_eq!(clients[0].partner_company.as_deref(), Some("Acme"));

    platform
        .network
        .reject_request(clients[0].id)
        .expect("rejection");

    // A rejected pair can be asked again; the same row flips back.
    platform
        .network
        .request_access(employer.user_id, consultant.user_id, None)
        .expect("re-request");
    let clients = platform
        .network
        .consultant_clients(consultant.user_id)
        .expect("client listing");
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].status, "pending");

    platform
        .network
        .approve_request(clients[0].id)
        .expect("approval");

    let network = platform
        .network
        .employer_network(employer.user_id)
        .expect("network listing");
    assert_eq!(network.len(), 1);
    assert_eq!(network[0].status, "approved");
    assert_eq!(network[0].partner_name, "Cid");
    assert_eq!(network[0].partner_company.as_deref(), Some("TalentWorks"));

    // With access in place the consultant posts on the employer's behalf
    // and the job inherits the employer's company.
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
    assert_eq!(job.consultant_id, Some(consultant.user_id));
    assert_eq!(job.employer_id, Some(employer.user_id));
    assert_eq!(job.company_id, employer.company_id);
    assert_eq!(job.company_name, "Acme");

    let attributed = platform
        .jobs
        .by_consultant(consultant.user_id)
        .expect("consultant jobs");
    assert_eq!(attributed.len(), 1);
    assert_eq!(attributed[0].employer_name, "Bea");
}

#[test]
fn consultant_inbox_records_the_whole_exchange() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some(("Acme", "Employer")));
    let consultant = register(
        &platform,
        "Cid",
        "Consultant",
        Some(("TalentWorks", "Consultancy")),
    );

    platform
        .network
        .request_access(
            employer.user_id,
            consultant.user_id,
            Some(requirement_note()),
        )
        .expect("request sent");
    let clients = platform
        .network
        .consultant_clients(consultant.user_id)
        .expect("client listing");
    platform
        .network
        .approve_request(clients[0].id)
        .expect("approval");

    let inbox = platform
        .notifications
        .list(consultant.user_id)
        .expect("inbox");
    assert_eq!(inbox.len(), 2);
    // Newest first.
    assert_eq!(
        inbox[0].text,
        "Your request for employer access has been approved."
    );
    assert!(inbox[1]
        .text
        .ends_with("Note: Role: Backend Engineer; Salary: 12 LPA"));

    platform
        .notifications
        .mark_read(inbox[0].id)
        .expect("mark read");
    platform
        .notifications
        .mark_read(inbox[0].id)
        .expect("mark read is idempotent");
    let inbox = platform
        .notifications
        .list(consultant.user_id)
        .expect("inbox");
    assert!(inbox[0].read);
    assert!(!inbox[1].read);
}

#[test]
fn unilateral_grant_and_removal() {
    let platform = platform();
    let employer = register(&platform, "Bea", "Employer", Some(("Acme", "Employer")));
    let consultant = register(
        &platform,
        "Cid",
        "Consultant",
        Some(("TalentWorks", "Consultancy")),
    );

    // No prior request: the employer can grant directly.
    platform
        .network
        .grant_access(employer.user_id, consultant.user_id, None)
        .expect("grant");
    let network = platform
        .network
        .employer_network(employer.user_id)
        .expect("network listing");
    assert_eq!(network.len(), 1);
    assert_eq!(network[0].status, "approved");

    platform
        .network
        .remove_consultant(employer.user_id, consultant.user_id)
        .expect("removal");
    assert!(platform
        .network
        .employer_network(employer.user_id)
        .expect("network listing")
        .is_empty());
}
