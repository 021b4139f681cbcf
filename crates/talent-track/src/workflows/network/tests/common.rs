use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;

use crate::store::{CompanyStore, MemoryStore, NotificationStore, UserStore};
use crate::workflows::directory::domain::{
    AccountStatus, Company, CompanyId, CompanyType, SeekerProfile, User, UserId, UserRole,
};
use crate::workflows::network::domain::EngagementNote;
use crate::workflows::network::service::NetworkService;
use crate::workflows::notifications::domain::Notification;
use crate::workflows::notifications::service::NotificationService;

pub(super) fn build_service() -> (NetworkService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let notifier = Arc::new(NotificationService::new(store.clone()));
    let service = NetworkService::new(store.clone(), store.clone(), store.clone(), notifier);
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

pub(super) fn add_company(store: &MemoryStore, name: &str, kind: CompanyType) -> Company {
    CompanyStore::add(
        store,
        Company {
            id: 0,
            name: name.to_string(),
            kind,
            status: AccountStatus::Active,
            location: String::new(),
            description: String::new(),
        },
    )
    .expect("company insert")
}

pub(super) fn note(pairs: &[(&str, &str)]) -> EngagementNote {
    let fields: BTreeMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    EngagementNote { fields }
}

pub(super) fn inbox(store: &MemoryStore, user_id: UserId) -> Vec<Notification> {
    store.for_user(user_id).expect("notification read")
}
