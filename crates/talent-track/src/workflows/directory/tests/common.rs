use std::sync::Arc;

use crate::store::MemoryStore;
use crate::workflows::directory::domain::RegistrationRequest;
use crate::workflows::directory::service::AccountService;

pub(super) fn build_service() -> (AccountService, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let service = AccountService::new(store.clone(), store.clone());
    (service, store)
}

pub(super) fn registration(name: &str, role: &str) -> RegistrationRequest {
    RegistrationRequest {
        name: name.to_string(),
        username: name.to_lowercase(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "s3cret-pw".to_string(),
        role: role.to_string(),
        company_name: None,
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
    }
}

pub(super) fn employer_registration(name: &str, company: &str) -> RegistrationRequest {
    RegistrationRequest {
        company_name: Some(company.to_string()),
        ..registration(name, "Employer")
    }
}

pub(super) fn consultant_registration(name: &str, company: &str) -> RegistrationRequest {
    RegistrationRequest {
        company_name: Some(company.to_string()),
        company_type: Some("Consultancy".to_string()),
        ..registration(name, "Consultant")
    }
}
