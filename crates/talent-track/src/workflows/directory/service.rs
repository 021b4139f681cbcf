use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::domain::{
    AccountStatus, AuthSession, ChangePasswordRequest, Company, CompanyType, LoginRequest,
    ProfileUpdate, RegistrationRequest, SeekerProfile, User, UserAccount, UserId, UserRole,
    UserSummary,
};
use super::password::{self, PasswordError};
use crate::store::{CompanyStore, StoreError, UserStore};

/// Number of profile fields counted towards completeness.
const COMPLETENESS_FIELDS: u32 = 6;

/// Accounts, registration, and credential handling for all four roles.
pub struct AccountService {
    users: Arc<dyn UserStore>,
    companies: Arc<dyn CompanyStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account is blocked")]
    AccountBlocked,
    #[error("invalid credentials for the selected role")]
    RoleMismatch,
    #[error("user with this email or username already exists")]
    DuplicateIdentity,
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("user not found")]
    UserNotFound,
    #[error("invalid old password")]
    InvalidOldPassword,
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn mock_token() -> String {
    // Interface contract only; real token issuance is out of scope.
    format!("mock-jwt-token-{}", Uuid::new_v4())
}

fn clean_skills(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

impl AccountService {
    pub fn new(users: Arc<dyn UserStore>, companies: Arc<dyn CompanyStore>) -> Self {
        Self { users, companies }
    }

    pub fn register(&self, request: RegistrationRequest) -> Result<AuthSession, AccountError> {
        let role = UserRole::parse(&request.role)
            .ok_or_else(|| AccountError::UnknownRole(request.role.clone()))?;

        if self.users.find_by_identifier(&request.email)?.is_some()
            || self.users.find_by_identifier(&request.username)?.is_some()
        {
            return Err(AccountError::DuplicateIdentity);
        }

        let mut company_id = None;
        if matches!(role, UserRole::Employer | UserRole::Consultant) {
            if let Some(company_name) = request
                .company_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
            {
                let kind = match request.company_type.as_deref() {
                    Some(value) if value.eq_ignore_ascii_case("consultancy") => {
                        CompanyType::Consultancy
                    }
                    _ => CompanyType::Employer,
                };
                let company = self.companies.add(Company {
                    id: 0,
                    name: company_name.to_string(),
                    kind,
                    status: AccountStatus::Active,
                    location: "Unknown".to_string(),
                    description: String::new(),
                })?;
                company_id = Some(company.id);
            }
        }

        let user = self.users.add(User {
            id: 0,
            name: request.name,
            username: request.username,
            email: request.email,
            password_hash: password::hash_password(&request.password)?,
            role,
            status: AccountStatus::Active,
            company_id,
            profile: SeekerProfile {
                skills: clean_skills(request.skills),
                address: request.address,
                city: request.city,
                state: request.state,
                pin_code: request.pin_code,
                phone: request.phone,
                date_of_birth: request.date_of_birth,
                qualification: request.qualification,
                experience_years: request.experience_years,
                ..SeekerProfile::default()
            },
            created_at: Utc::now(),
        })?;

        Ok(Self::session(&user))
    }

    pub fn login(&self, request: LoginRequest) -> Result<AuthSession, AccountError> {
        let user = self
            .users
            .find_by_identifier(&request.identifier)?
            .ok_or(AccountError::InvalidCredentials)?;

        if !password::verify_password(&request.password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials);
        }

        if user.status == AccountStatus::Blocked {
            return Err(AccountError::AccountBlocked);
        }

        if let Some(requested) = request
            .role
            .as_deref()
            .map(str::trim)
            .filter(|role| !role.is_empty())
        {
            if UserRole::parse(requested) != Some(user.role) {
                return Err(AccountError::RoleMismatch);
            }
        }

        Ok(Self::session(&user))
    }

    pub fn change_password(&self, request: ChangePasswordRequest) -> Result<(), AccountError> {
        let mut user = self
            .users
            .get(request.user_id)?
            .ok_or(AccountError::UserNotFound)?;

        if !password::verify_password(&request.old_password, &user.password_hash)? {
            return Err(AccountError::InvalidOldPassword);
        }

        user.password_hash = password::hash_password(&request.new_password)?;
        self.users.update(user)?;
        Ok(())
    }

    pub fn update_profile(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> Result<(), AccountError> {
        let mut user = self.users.get(user_id)?.ok_or(AccountError::UserNotFound)?;

        user.profile.address = update.address;
        user.profile.desired_job = update.desired_job;
        user.profile.experience_years = update.experience_years;
        user.profile.summary = update.summary;
        let skills = clean_skills(update.skills);
        if !skills.is_empty() {
            user.profile.skills = skills;
        }

        self.users.update(user)?;
        Ok(())
    }

    /// Percentage of the six seeker profile fields that are filled in.
    pub fn profile_completeness(&self, user_id: UserId) -> Result<u8, AccountError> {
        let user = self.users.get(user_id)?.ok_or(AccountError::UserNotFound)?;
        let profile = &user.profile;

        let mut completed = 0u32;
        if !profile.skills.is_empty() {
            completed += 1;
        }
        if profile.address.as_deref().is_some_and(|s| !s.is_empty()) {
            completed += 1;
        }
        if profile.resume_ref.as_deref().is_some_and(|s| !s.is_empty()) {
            completed += 1;
        }
        if profile.desired_job.as_deref().is_some_and(|s| !s.is_empty()) {
            completed += 1;
        }
        if profile.experience_years.is_some() {
            completed += 1;
        }
        if profile.summary.as_deref().is_some_and(|s| !s.is_empty()) {
            completed += 1;
        }

        Ok((completed * 100 / COMPLETENESS_FIELDS) as u8)
    }

    /// Record the opaque reference handed back by the resume blob store.
    /// The reference is derived from the uploaded file name the same way the
    /// store keys its blobs.
    pub fn store_resume(&self, user_id: UserId, file_name: &str) -> Result<String, AccountError> {
        let mut user = self.users.get(user_id)?.ok_or(AccountError::UserNotFound)?;

        let reference = format!("{user_id}_{}_{file_name}", Uuid::new_v4());
        user.profile.resume_ref = Some(reference.clone());
        self.users.update(user)?;
        Ok(reference)
    }

    pub fn user(&self, user_id: UserId) -> Result<Option<UserAccount>, AccountError> {
        Ok(self.users.get(user_id)?.map(|user| UserAccount::from(&user)))
    }

    pub fn employers(&self) -> Result<Vec<UserSummary>, AccountError> {
        let employers = self.users.by_role(UserRole::Employer)?;
        employers
            .iter()
            .map(|user| self.summary(user))
            .collect::<Result<Vec<_>, _>>()
    }

    pub(crate) fn summary(&self, user: &User) -> Result<UserSummary, AccountError> {
        let company_name = match user.company_id {
            Some(company_id) => self.companies.get(company_id)?.map(|company| company.name),
            None => None,
        };
        Ok(UserSummary {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.label(),
            status: user.status.label(),
            company_name,
        })
    }

    fn session(user: &User) -> AuthSession {
        AuthSession {
            user_id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.label(),
            token: mock_token(),
            company_id: user.company_id,
        }
    }
}
