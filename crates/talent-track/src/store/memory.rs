//! Mutex-guarded in-memory store backing the api binary and the test
//! suites. Tables hand out monotonically increasing identities starting
//! at 1.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::{
    ApplicationStore, CompanyStore, ComplaintStore, ConsultantLinkStore, JobStore,
    NotificationStore, StoreError, UserStore,
};
use crate::workflows::applications::domain::{Application, ApplicationId};
use crate::workflows::complaints::domain::{Complaint, ComplaintId};
use crate::workflows::directory::domain::{Company, CompanyId, User, UserId, UserRole};
use crate::workflows::jobs::domain::{Job, JobId};
use crate::workflows::network::domain::{ConsultantLink, LinkId};
use crate::workflows::notifications::domain::{Notification, NotificationId};

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u32, T>,
    next_id: u32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn assign_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn replace(&mut self, id: u32, row: T) -> Result<(), StoreError> {
        if !self.rows.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        self.rows.insert(id, row);
        Ok(())
    }

    fn remove(&mut self, id: u32) -> Result<(), StoreError> {
        self.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Table<User>>,
    companies: Mutex<Table<Company>>,
    jobs: Mutex<Table<Job>>,
    applications: Mutex<Table<Application>>,
    links: Mutex<Table<ConsultantLink>>,
    complaints: Mutex<Table<Complaint>>,
    notifications: Mutex<Table<Notification>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn get(&self, id: UserId) -> Result<Option<User>, StoreError> {
        let guard = self.users.lock().expect("user table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<User>, StoreError> {
        let guard = self.users.lock().expect("user table mutex poisoned");
        Ok(guard.rows.values().cloned().collect())
    }

    fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, StoreError> {
        let guard = self.users.lock().expect("user table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .find(|user| user.email == identifier || user.username == identifier)
            .cloned())
    }

    fn by_role(&self, role: UserRole) -> Result<Vec<User>, StoreError> {
        let guard = self.users.lock().expect("user table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|user| user.role == role)
            .cloned()
            .collect())
    }

    fn add(&self, mut user: User) -> Result<User, StoreError> {
        let mut guard = self.users.lock().expect("user table mutex poisoned");
        user.id = guard.assign_id();
        guard.rows.insert(user.id, user.clone());
        Ok(user)
    }

    fn update(&self, user: User) -> Result<(), StoreError> {
        let mut guard = self.users.lock().expect("user table mutex poisoned");
        guard.replace(user.id, user)
    }

    fn delete(&self, id: UserId) -> Result<(), StoreError> {
        let mut guard = self.users.lock().expect("user table mutex poisoned");
        guard.remove(id)
    }
}

impl CompanyStore for MemoryStore {
    fn get(&self, id: CompanyId) -> Result<Option<Company>, StoreError> {
        let guard = self.companies.lock().expect("company table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<Company>, StoreError> {
        let guard = self.companies.lock().expect("company table mutex poisoned");
        Ok(guard.rows.values().cloned().collect())
    }

    fn add(&self, mut company: Company) -> Result<Company, StoreError> {
        let mut guard = self.companies.lock().expect("company table mutex poisoned");
        company.id = guard.assign_id();
        guard.rows.insert(company.id, company.clone());
        Ok(company)
    }

    fn update(&self, company: Company) -> Result<(), StoreError> {
        let mut guard = self.companies.lock().expect("company table mutex poisoned");
        guard.replace(company.id, company)
    }

    fn delete(&self, id: CompanyId) -> Result<(), StoreError> {
        let mut guard = self.companies.lock().expect("company table mutex poisoned");
        guard.remove(id)
    }
}

impl JobStore for MemoryStore {
    fn get(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        let guard = self.jobs.lock().expect("job table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<Job>, StoreError> {
        let guard = self.jobs.lock().expect("job table mutex poisoned");
        Ok(guard.rows.values().cloned().collect())
    }

    fn by_company(&self, company_id: CompanyId) -> Result<Vec<Job>, StoreError> {
        let guard = self.jobs.lock().expect("job table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|job| job.company_id == Some(company_id))
            .cloned()
            .collect())
    }

    fn by_consultant(&self, consultant_id: UserId) -> Result<Vec<Job>, StoreError> {
        let guard = self.jobs.lock().expect("job table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|job| job.consultant_id == Some(consultant_id))
            .cloned()
            .collect())
    }

    fn add(&self, mut job: Job) -> Result<Job, StoreError> {
        let mut guard = self.jobs.lock().expect("job table mutex poisoned");
        job.id = guard.assign_id();
        guard.rows.insert(job.id, job.clone());
        Ok(job)
    }

    fn update(&self, job: Job) -> Result<(), StoreError> {
        let mut guard = self.jobs.lock().expect("job table mutex poisoned");
        guard.replace(job.id, job)
    }
}

impl ApplicationStore for MemoryStore {
    fn get(&self, id: ApplicationId) -> Result<Option<Application>, StoreError> {
        let guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<Application>, StoreError> {
        let guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        Ok(guard.rows.values().cloned().collect())
    }

    fn by_job(&self, job_id: JobId) -> Result<Vec<Application>, StoreError> {
        let guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|application| application.job_id == job_id)
            .cloned()
            .collect())
    }

    fn by_applicant(&self, applicant_id: UserId) -> Result<Vec<Application>, StoreError> {
        let guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|application| application.applicant_id == applicant_id)
            .cloned()
            .collect())
    }

    fn for_job_and_applicant(
        &self,
        job_id: JobId,
        applicant_id: UserId,
    ) -> Result<Option<Application>, StoreError> {
        let guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .find(|application| {
                application.job_id == job_id && application.applicant_id == applicant_id
            })
            .cloned())
    }

    fn add(&self, mut application: Application) -> Result<Application, StoreError> {
        let mut guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        let duplicate = guard.rows.values().any(|existing| {
            existing.job_id == application.job_id
                && existing.applicant_id == application.applicant_id
        });
        if duplicate {
            return Err(StoreError::Conflict);
        }
        application.id = guard.assign_id();
        guard.rows.insert(application.id, application.clone());
        Ok(application)
    }

    fn update(&self, application: Application) -> Result<(), StoreError> {
        let mut guard = self
            .applications
            .lock()
            .expect("application table mutex poisoned");
        guard.replace(application.id, application)
    }
}

impl ConsultantLinkStore for MemoryStore {
    fn get(&self, id: LinkId) -> Result<Option<ConsultantLink>, StoreError> {
        let guard = self.links.lock().expect("link table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn for_pair(
        &self,
        employer_id: UserId,
        consultant_id: UserId,
    ) -> Result<Option<ConsultantLink>, StoreError> {
        let guard = self.links.lock().expect("link table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .find(|link| link.employer_id == employer_id && link.consultant_id == consultant_id)
            .cloned())
    }

    fn by_employer(&self, employer_id: UserId) -> Result<Vec<ConsultantLink>, StoreError> {
        let guard = self.links.lock().expect("link table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|link| link.employer_id == employer_id)
            .cloned()
            .collect())
    }

    fn by_consultant(&self, consultant_id: UserId) -> Result<Vec<ConsultantLink>, StoreError> {
        let guard = self.links.lock().expect("link table mutex poisoned");
        Ok(guard
            .rows
            .values()
            .filter(|link| link.consultant_id == consultant_id)
            .cloned()
            .collect())
    }

    fn add(&self, mut link: ConsultantLink) -> Result<ConsultantLink, StoreError> {
        let mut guard = self.links.lock().expect("link table mutex poisoned");
        let duplicate = guard.rows.values().any(|existing| {
            existing.employer_id == link.employer_id
                && existing.consultant_id == link.consultant_id
        });
        if duplicate {
            return Err(StoreError::Conflict);
        }
        link.id = guard.assign_id();
        guard.rows.insert(link.id, link.clone());
        Ok(link)
    }

    fn update(&self, link: ConsultantLink) -> Result<(), StoreError> {
        let mut guard = self.links.lock().expect("link table mutex poisoned");
        guard.replace(link.id, link)
    }

    fn remove(&self, id: LinkId) -> Result<(), StoreError> {
        let mut guard = self.links.lock().expect("link table mutex poisoned");
        guard.remove(id)
    }
}

impl ComplaintStore for MemoryStore {
    fn get(&self, id: ComplaintId) -> Result<Option<Complaint>, StoreError> {
        let guard = self
            .complaints
            .lock()
            .expect("complaint table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn all(&self) -> Result<Vec<Complaint>, StoreError> {
        let guard = self
            .complaints
            .lock()
            .expect("complaint table mutex poisoned");
        Ok(guard.rows.values().cloned().collect())
    }

    fn add(&self, mut complaint: Complaint) -> Result<Complaint, StoreError> {
        let mut guard = self
            .complaints
            .lock()
            .expect("complaint table mutex poisoned");
        complaint.id = guard.assign_id();
        guard.rows.insert(complaint.id, complaint.clone());
        Ok(complaint)
    }

    fn update(&self, complaint: Complaint) -> Result<(), StoreError> {
        let mut guard = self
            .complaints
            .lock()
            .expect("complaint table mutex poisoned");
        guard.replace(complaint.id, complaint)
    }
}

impl NotificationStore for MemoryStore {
    fn get(&self, id: NotificationId) -> Result<Option<Notification>, StoreError> {
        let guard = self
            .notifications
            .lock()
            .expect("notification table mutex poisoned");
        Ok(guard.rows.get(&id).cloned())
    }

    fn for_user(&self, user_id: UserId) -> Result<Vec<Notification>, StoreError> {
        let guard = self
            .notifications
            .lock()
            .expect("notification table mutex poisoned");
        let mut rows: Vec<Notification> = guard
            .rows
            .values()
            .filter(|notification| notification.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.time.cmp(&a.time).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    fn add(&self, mut notification: Notification) -> Result<Notification, StoreError> {
        let mut guard = self
            .notifications
            .lock()
            .expect("notification table mutex poisoned");
        notification.id = guard.assign_id();
        guard.rows.insert(notification.id, notification.clone());
        Ok(notification)
    }

    fn update(&self, notification: Notification) -> Result<(), StoreError> {
        let mut guard = self
            .notifications
            .lock()
            .expect("notification table mutex poisoned");
        guard.replace(notification.id, notification)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::workflows::applications::domain::ApplicationStatus;
    use crate::workflows::directory::domain::{AccountStatus, SeekerProfile};

    fn user(name: &str) -> User {
        User {
            id: 0,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: String::new(),
            role: UserRole::Seeker,
            status: AccountStatus::Active,
            company_id: None,
            profile: SeekerProfile::default(),
            created_at: Utc::now(),
        }
    }

    fn application(job_id: JobId, applicant_id: UserId) -> Application {
        Application {
            id: 0,
            job_id,
            applicant_id,
            status: ApplicationStatus::Pending,
            date_applied: Utc::now(),
            interview: None,
        }
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = UserStore::add(&store, user("Ada")).expect("insert");
        let second = UserStore::add(&store, user("Grace")).expect("insert");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn duplicate_application_pair_conflicts() {
        let store = MemoryStore::new();
        ApplicationStore::add(&store, application(7, 3)).expect("first insert");
        match ApplicationStore::add(&store, application(7, 3)) {
            Err(StoreError::Conflict) => {}
            other => panic!("expected conflict, got {other:?}"),
        }
        assert_eq!(ApplicationStore::all(&store).unwrap().len(), 1);
    }

    #[test]
    fn update_of_missing_row_is_not_found() {
        let store = MemoryStore::new();
        let mut ghost = user("Ghost");
        ghost.id = 42;
        match UserStore::update(&store, ghost) {
            Err(StoreError::NotFound) => {}
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn notifications_come_back_newest_first() {
        let store = MemoryStore::new();
        let base = Utc::now();
        for offset in 0..3i64 {
            NotificationStore::add(
                &store,
                Notification {
                    id: 0,
                    user_id: 9,
                    text: format!("event {offset}"),
                    time: base + chrono::Duration::seconds(offset),
                    read: false,
                },
            )
            .expect("insert");
        }
        let rows = store.for_user(9).expect("list");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text, "event 2");
        assert_eq!(rows[2].text, "event 0");
    }
}
