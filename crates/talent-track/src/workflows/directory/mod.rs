//! Identity and accounts: users, companies, registration, and credentials.

pub mod domain;
pub mod password;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AccountStatus, AuthSession, ChangePasswordRequest, Company, CompanyId, CompanyType,
    LoginRequest, ProfileUpdate, RegistrationRequest, SeekerProfile, User, UserAccount, UserId,
    UserRole, UserSummary,
};
pub use router::account_router;
pub use service::{AccountError, AccountService};
