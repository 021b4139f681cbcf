use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub type UserId = u32;
pub type CompanyId = u32;

/// Platform roles. Consultants post jobs on behalf of linked employers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Seeker,
    Employer,
    Consultant,
    Admin,
}

impl UserRole {
    pub const fn label(self) -> &'static str {
        match self {
            UserRole::Seeker => "seeker",
            UserRole::Employer => "employer",
            UserRole::Consultant => "consultant",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "seeker" => Some(UserRole::Seeker),
            "employer" => Some(UserRole::Employer),
            "consultant" => Some(UserRole::Consultant),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// Moderation toggle shared by users and companies. Blocking never cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Blocked,
}

impl AccountStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Blocked => "blocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyType {
    Employer,
    Consultancy,
}

impl CompanyType {
    pub const fn label(self) -> &'static str {
        match self {
            CompanyType::Employer => "employer",
            CompanyType::Consultancy => "consultancy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub kind: CompanyType,
    pub status: AccountStatus,
    pub location: String,
    pub description: String,
}

/// Seeker-facing profile data. Empty for employer/consultant/admin accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub skills: Vec<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub qualification: Option<String>,
    pub resume_ref: Option<String>,
    pub desired_job: Option<String>,
    pub experience_years: Option<u8>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub company_id: Option<CompanyId>,
    pub profile: SeekerProfile,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. Company fields are only honored for employer and
/// consultant roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_type: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pin_code: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address or username.
    pub identifier: String,
    pub password: String,
    /// When present, the account's role must match.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub user_id: UserId,
    pub old_password: String,
    pub new_password: String,
}

/// Profile update payload. Skills replace the stored list only when
/// non-empty; the remaining fields overwrite unconditionally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub desired_job: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u8>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Authenticated session handed back to the boundary layer. The token is an
/// opaque mock credential, not a real JWT.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
}

/// Sanitized single-account view: everything the profile screens need,
/// never the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
    pub profile: SeekerProfile,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserAccount {
    fn from(user: &User) -> Self {
        UserAccount {
            id: user.id,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.label(),
            status: user.status.label(),
            company_id: user.company_id,
            profile: user.profile.clone(),
            created_at: user.created_at,
        }
    }
}

/// Listing row shared by the employers listing and admin user views.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}
