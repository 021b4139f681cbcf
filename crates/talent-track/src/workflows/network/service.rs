use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    ConsultantLink, ConsultantSummary, EngagementNote, LinkId, LinkStatus, LinkView,
};
use crate::store::{CompanyStore, ConsultantLinkStore, StoreError, UserStore};
use crate::workflows::directory::domain::{User, UserId, UserRole};
use crate::workflows::notifications::service::{notify_best_effort, NotificationSink};

/// The consultant-employer access workflow: one state machine per
/// (employer, consultant) pair, plus the directory searches both sides use
/// to find each other.
pub struct NetworkService {
    links: Arc<dyn ConsultantLinkStore>,
    users: Arc<dyn UserStore>,
    companies: Arc<dyn CompanyStore>,
    notifier: Arc<dyn NotificationSink>,
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn with_note(mut message: String, note: Option<&EngagementNote>) -> String {
    if let Some(note) = note.filter(|note| !note.is_empty()) {
        message.push_str(&format!(" Note: {note}"));
    }
    message
}

impl NetworkService {
    pub fn new(
        links: Arc<dyn ConsultantLinkStore>,
        users: Arc<dyn UserStore>,
        companies: Arc<dyn CompanyStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            links,
            users,
            companies,
            notifier,
        }
    }

    /// Ask a consultant for access. Creates a Pending link, or flips a
    /// Rejected one back to Pending with a fresh request timestamp. A live
    /// (Pending or Approved) link makes this a silent no-op.
    pub fn request_access(
        &self,
        employer_id: UserId,
        consultant_id: UserId,
        note: Option<EngagementNote>,
    ) -> Result<(), NetworkError> {
        if let Some(mut existing) = self.links.for_pair(employer_id, consultant_id)? {
            if existing.status == LinkStatus::Rejected {
                existing.status = LinkStatus::Pending;
                existing.date_requested = Utc::now();
                self.links.update(existing)?;
                self.notify_requested(employer_id, consultant_id, note.as_ref());
            }
            return Ok(());
        }

        match self.links.add(ConsultantLink {
            id: 0,
            employer_id,
            consultant_id,
            status: LinkStatus::Pending,
            date_requested: Utc::now(),
            date_actioned: None,
            note: None,
        }) {
            Ok(_) => {}
            // A concurrent request won the insert; same no-op as finding a
            // live row above.
            Err(StoreError::Conflict) => return Ok(()),
            Err(err) => return Err(err.into()),
        }

        self.notify_requested(employer_id, consultant_id, note.as_ref());
        Ok(())
    }

    /// Unilaterally approve a consultant, regardless of any prior state.
    /// Creates the link directly in Approved when no row exists; a supplied
    /// note overwrites the stored one.
    pub fn grant_access(
        &self,
        employer_id: UserId,
        consultant_id: UserId,
        note: Option<EngagementNote>,
    ) -> Result<(), NetworkError> {
        let now = Utc::now();
        let stored_note = note.clone().filter(|note| !note.is_empty());

        if let Some(mut existing) = self.links.for_pair(employer_id, consultant_id)? {
            existing.status = LinkStatus::Approved;
            existing.date_actioned = Some(now);
            if stored_note.is_some() {
                existing.note = stored_note;
            }
            self.links.update(existing)?;
        } else {
            let inserted = self.links.add(ConsultantLink {
                id: 0,
                employer_id,
                consultant_id,
                status: LinkStatus::Approved,
                date_requested: now,
                date_actioned: Some(now),
                note: stored_note.clone(),
            });
            match inserted {
                Ok(_) => {}
                // A concurrent writer created the row first; force-approve it.
                Err(StoreError::Conflict) => {
                    if let Some(mut existing) = self.links.for_pair(employer_id, consultant_id)? {
                        existing.status = LinkStatus::Approved;
                        existing.date_actioned = Some(now);
                        if stored_note.is_some() {
                            existing.note = stored_note;
                        }
                        self.links.update(existing)?;
                    }
                }
                Err(err) => return Err(err.into()),
            }
        }

        notify_best_effort(
            self.notifier.as_ref(),
            consultant_id,
            &with_note(
                "You have been granted access to post jobs for an employer.".to_string(),
                note.as_ref(),
            ),
        );
        Ok(())
    }

    /// Approve a pending request by its link id. Missing ids are ignored.
    pub fn approve_request(&self, link_id: LinkId) -> Result<(), NetworkError> {
        if let Some(mut link) = self.links.get(link_id)? {
            link.status = LinkStatus::Approved;
            link.date_actioned = Some(Utc::now());
            let consultant_id = link.consultant_id;
            self.links.update(link)?;
            notify_best_effort(
                self.notifier.as_ref(),
                consultant_id,
                "Your request for employer access has been approved.",
            );
        }
        Ok(())
    }

    /// Reject a pending request by its link id. Missing ids are ignored.
    pub fn reject_request(&self, link_id: LinkId) -> Result<(), NetworkError> {
        if let Some(mut link) = self.links.get(link_id)? {
            link.status = LinkStatus::Rejected;
            link.date_actioned = Some(Utc::now());
            let consultant_id = link.consultant_id;
            self.links.update(link)?;
            notify_best_effort(
                self.notifier.as_ref(),
                consultant_id,
                "Your request for employer access has been rejected.",
            );
        }
        Ok(())
    }

    /// Hard-delete the link between an employer and a consultant.
    pub fn remove_consultant(
        &self,
        employer_id: UserId,
        consultant_id: UserId,
    ) -> Result<(), NetworkError> {
        if let Some(link) = self.links.for_pair(employer_id, consultant_id)? {
            self.links.remove(link.id)?;
        }
        Ok(())
    }

    /// An employer's network: every link with the consultant side resolved.
    pub fn employer_network(&self, employer_id: UserId) -> Result<Vec<LinkView>, NetworkError> {
        let links = self.links.by_employer(employer_id)?;
        links
            .iter()
            .map(|link| self.link_view(link, link.consultant_id))
            .collect()
    }

    /// A consultant's client list: every link with the employer side
    /// resolved.
    pub fn consultant_clients(&self, consultant_id: UserId) -> Result<Vec<LinkView>, NetworkError> {
        let links = self.links.by_consultant(consultant_id)?;
        links
            .iter()
            .map(|link| self.link_view(link, link.employer_id))
            .collect()
    }

    /// Case-insensitive substring search over consultant name, email, and
    /// company name. A blank query returns every consultant.
    pub fn search_consultants(&self, query: &str) -> Result<Vec<ConsultantSummary>, NetworkError> {
        let needle = query.trim().to_lowercase();
        let mut results = Vec::new();

        for user in self.users.by_role(UserRole::Consultant)? {
            let company_name = self.company_name(&user)?;
            let matches = needle.is_empty()
                || user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || company_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle));
            if matches {
                results.push(ConsultantSummary {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                    company_name,
                });
            }
        }

        Ok(results)
    }

    fn notify_requested(
        &self,
        employer_id: UserId,
        consultant_id: UserId,
        note: Option<&EngagementNote>,
    ) {
        notify_best_effort(
            self.notifier.as_ref(),
            consultant_id,
            &with_note(
                format!("Employer {employer_id} has requested access to your services."),
                note,
            ),
        );
    }

    fn company_name(&self, user: &User) -> Result<Option<String>, NetworkError> {
        Ok(match user.company_id {
            Some(company_id) => self.companies.get(company_id)?.map(|company| company.name),
            None => None,
        })
    }

    fn link_view(&self, link: &ConsultantLink, partner_id: UserId) -> Result<LinkView, NetworkError> {
        let partner = self.users.get(partner_id)?;
        let partner_company = match &partner {
            Some(user) => self.company_name(user)?,
            None => None,
        };
        Ok(LinkView {
            id: link.id,
            employer_id: link.employer_id,
            consultant_id: link.consultant_id,
            partner_name: partner
                .map(|user| user.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            partner_company,
            status: link.status.label(),
            date_requested: link.date_requested,
            date_actioned: link.date_actioned,
            note: link.note.clone(),
        })
    }
}
