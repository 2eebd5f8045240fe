//! Visitor record and lifecycle
//!
//! A visitor moves through `Registered → Approved → CheckedIn → CheckedOut`.
//! `Denied` is terminal and only reachable from `Registered`. The state is
//! derived from the record's fields so it can never disagree with them.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{EPass, VisitorId, VisitorStatus};
use crate::user::Identity;

/// Rejected lifecycle transitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// Check-in (or ePass issue) attempted on an unapproved visitor
    #[error("Access Denied! Visitor not approved.")]
    NotApproved,

    /// Check-out attempted before any check-in
    #[error("Visitor has not checked in yet.")]
    NotCheckedIn,

    /// A second ePass was offered to a visitor that already holds one
    #[error("Visitor already holds ePass {0}")]
    EPassAlreadyAssigned(EPass),
}

/// Details captured at the front desk when a visitor arrives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorDetails {
    /// Visitor's name
    pub name: String,
    /// Reason for the visit
    pub purpose: String,
    /// Name of the employee being visited
    pub employee_name: String,
    /// Visitor's company
    pub company: String,
    /// Phone number, email or similar
    pub contact_info: String,
}

impl VisitorDetails {
    /// Create visitor details
    pub fn new(
        name: impl Into<String>,
        purpose: impl Into<String>,
        employee_name: impl Into<String>,
        company: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            purpose: purpose.into(),
            employee_name: employee_name.into(),
            company: company.into(),
            contact_info: contact_info.into(),
        }
    }
}

/// A visitor known to the desk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visitor {
    /// Visitor ID and name
    pub identity: Identity<VisitorId>,
    /// Reason for the visit
    pub purpose: String,
    /// Name of the employee being visited
    pub visiting_employee: String,
    /// When the visitor was registered
    pub registered_at: DateTime<Local>,
    /// Visitor's company
    pub company: String,
    /// Contact information
    pub contact_info: String,
    approved: bool,
    denied: bool,
    epass: Option<EPass>,
    check_in_time: Option<DateTime<Local>>,
    check_out_time: Option<DateTime<Local>>,
}

impl Visitor {
    /// Create a visitor in the `Registered` state
    pub fn new(id: VisitorId, details: VisitorDetails, registered_at: DateTime<Local>) -> Self {
        Self {
            identity: Identity::new(id, details.name),
            purpose: details.purpose,
            visiting_employee: details.employee_name,
            registered_at,
            company: details.company,
            contact_info: details.contact_info,
            approved: false,
            denied: false,
            epass: None,
            check_in_time: None,
            check_out_time: None,
        }
    }

    /// Visitor ID
    pub fn id(&self) -> &VisitorId {
        &self.identity.id
    }

    /// Visitor name
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Whether an employee approved this visitor
    pub fn is_approved(&self) -> bool {
        self.approved
    }

    /// Whether an employee turned this visitor away
    pub fn is_denied(&self) -> bool {
        self.denied
    }

    /// The issued ePass, if any
    pub fn epass(&self) -> Option<&EPass> {
        self.epass.as_ref()
    }

    /// Time of the latest check-in
    pub fn check_in_time(&self) -> Option<DateTime<Local>> {
        self.check_in_time
    }

    /// Time of the latest check-out
    pub fn check_out_time(&self) -> Option<DateTime<Local>> {
        self.check_out_time
    }

    /// Current lifecycle state
    pub fn status(&self) -> VisitorStatus {
        if self.denied {
            VisitorStatus::Denied
        } else if let Some(check_in) = self.check_in_time {
            // Whichever happened last wins; re-entry keeps the old check-out
            match self.check_out_time {
                Some(check_out) if check_out >= check_in => VisitorStatus::CheckedOut,
                _ => VisitorStatus::CheckedIn,
            }
        } else if self.approved {
            VisitorStatus::Approved
        } else {
            VisitorStatus::Registered
        }
    }

    /// Set the approval flag
    ///
    /// Idempotent for an approved visitor. Returns `false` and changes nothing
    /// for a denied visitor.
    pub fn approve(&mut self) -> bool {
        if self.denied {
            return false;
        }
        self.approved = true;
        true
    }

    /// Mark the visitor as denied
    ///
    /// Only a visitor still in `Registered` can be denied; any other state is
    /// left untouched and `false` is returned.
    pub fn deny(&mut self) -> bool {
        if self.status() != VisitorStatus::Registered {
            return false;
        }
        self.denied = true;
        true
    }

    /// Attach the ePass issued after approval
    pub fn assign_epass(&mut self, epass: EPass) -> Result<&EPass, LifecycleError> {
        if !self.approved {
            return Err(LifecycleError::NotApproved);
        }
        if let Some(existing) = &self.epass {
            return Err(LifecycleError::EPassAlreadyAssigned(existing.clone()));
        }
        Ok(self.epass.insert(epass))
    }

    /// Record entry at `at`
    ///
    /// A repeated check-in refreshes the timestamp. An earlier check-out is
    /// kept, so a visitor can leave and come back on the same pass.
    pub fn check_in(&mut self, at: DateTime<Local>) -> Result<DateTime<Local>, LifecycleError> {
        if !self.approved {
            return Err(LifecycleError::NotApproved);
        }
        self.check_in_time = Some(at);
        Ok(at)
    }

    /// Record exit at `at`
    pub fn check_out(&mut self, at: DateTime<Local>) -> Result<DateTime<Local>, LifecycleError> {
        if self.check_in_time.is_none() {
            return Err(LifecycleError::NotCheckedIn);
        }
        self.check_out_time = Some(at);
        Ok(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn bob() -> Visitor {
        Visitor::new(
            VisitorId::new("V1234567"),
            VisitorDetails::new("Bob", "Interview", "Alice", "Acme", "bob@acme.test"),
            Local::now(),
        )
    }

    #[test]
    fn test_new_visitor_is_registered() {
        let visitor = bob();

        assert_eq!(visitor.status(), VisitorStatus::Registered);
        assert_eq!(visitor.name(), "Bob");
        assert_eq!(visitor.visiting_employee, "Alice");
        assert!(!visitor.is_approved());
        assert!(visitor.epass().is_none());
        assert!(visitor.check_in_time().is_none());
        assert!(visitor.check_out_time().is_none());
    }

    #[test]
    fn test_full_lifecycle() {
        let mut visitor = bob();
        let start = Local::now();

        assert!(visitor.approve());
        assert_eq!(visitor.status(), VisitorStatus::Approved);

        visitor.assign_epass(EPass::from_suffix("AB123")).unwrap();
        assert_eq!(visitor.epass().map(EPass::as_str), Some("EPASS-AB123"));

        visitor.check_in(start).unwrap();
        assert_eq!(visitor.status(), VisitorStatus::CheckedIn);
        assert_eq!(visitor.check_in_time(), Some(start));

        let later = start + Duration::hours(2);
        visitor.check_out(later).unwrap();
        assert_eq!(visitor.status(), VisitorStatus::CheckedOut);
        assert_eq!(visitor.check_out_time(), Some(later));
    }

    #[test]
    fn test_approve_is_idempotent() {
        let mut visitor = bob();
        assert!(visitor.approve());
        assert!(visitor.approve());
        assert_eq!(visitor.status(), VisitorStatus::Approved);
    }

    #[test]
    fn test_check_in_requires_approval() {
        let mut visitor = bob();

        assert_eq!(visitor.check_in(Local::now()), Err(LifecycleError::NotApproved));
        assert!(visitor.check_in_time().is_none());
        assert_eq!(visitor.status(), VisitorStatus::Registered);
    }

    #[test]
    fn test_check_out_requires_check_in() {
        let mut visitor = bob();
        visitor.approve();

        assert_eq!(visitor.check_out(Local::now()), Err(LifecycleError::NotCheckedIn));
        assert!(visitor.check_out_time().is_none());
        assert_eq!(visitor.status(), VisitorStatus::Approved);
    }

    #[test]
    fn test_epass_only_after_approval_and_only_once() {
        let mut visitor = bob();

        assert_eq!(
            visitor.assign_epass(EPass::from_suffix("11111")),
            Err(LifecycleError::NotApproved)
        );
        assert!(visitor.epass().is_none());

        visitor.approve();
        visitor.assign_epass(EPass::from_suffix("11111")).unwrap();
        let second = visitor.assign_epass(EPass::from_suffix("22222"));
        assert!(matches!(second, Err(LifecycleError::EPassAlreadyAssigned(_))));
        assert_eq!(visitor.epass().unwrap().suffix(), "11111");
    }

    #[test]
    fn test_deny_is_terminal() {
        let mut visitor = bob();

        assert!(visitor.deny());
        assert_eq!(visitor.status(), VisitorStatus::Denied);
        assert!(!visitor.approve());
        assert!(!visitor.is_approved());
        assert_eq!(visitor.check_in(Local::now()), Err(LifecycleError::NotApproved));
        assert_eq!(visitor.status(), VisitorStatus::Denied);
    }

    #[test]
    fn test_deny_after_approval_has_no_effect() {
        let mut visitor = bob();
        visitor.approve();

        assert!(!visitor.deny());
        assert!(!visitor.is_denied());
        assert_eq!(visitor.status(), VisitorStatus::Approved);
    }

    #[test]
    fn test_reentry_keeps_check_out() {
        let mut visitor = bob();
        visitor.approve();
        let t0 = Local::now();

        visitor.check_in(t0).unwrap();
        visitor.check_out(t0 + Duration::minutes(30)).unwrap();
        visitor.check_in(t0 + Duration::hours(1)).unwrap();

        assert_eq!(visitor.status(), VisitorStatus::CheckedIn);
        assert_eq!(visitor.check_out_time(), Some(t0 + Duration::minutes(30)));
        assert_eq!(visitor.check_in_time(), Some(t0 + Duration::hours(1)));

        // Leaving again moves the check-out past the re-entry
        visitor.check_out(t0 + Duration::hours(2)).unwrap();
        assert_eq!(visitor.status(), VisitorStatus::CheckedOut);
    }
}
