//! Registration, check-in and check-out
//!
//! The security service orchestrates registry lookups and visitor lifecycle
//! transitions on behalf of the officer at the desk.

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::registry::Registry;
use crate::service::{DeskError, DeskResult};
use crate::types::{EPass, TokenGenerator, VisitorId};
use crate::user::{Security, Visitor, VisitorDetails};

/// Outcome of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReceipt {
    /// Generated visitor ID
    pub visitor_id: VisitorId,
    /// Visitor name
    pub visitor_name: String,
    /// Employee who approved the visit
    pub approved_by: String,
    /// Issued ePass
    pub epass: EPass,
}

/// Outcome of a successful check-in or check-out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitEvent {
    /// Visitor name
    pub visitor_name: String,
    /// ePass used at the desk
    pub epass: String,
    /// When the event was recorded
    pub at: DateTime<Local>,
}

/// Handles visitor registration and entry/exit at the desk
#[derive(Debug)]
pub struct SecurityService {
    officer: Security,
    tokens: TokenGenerator,
}

impl SecurityService {
    /// Create a security service staffed by `officer`
    pub fn new(officer: Security, tokens: TokenGenerator) -> Self {
        Self { officer, tokens }
    }

    /// Officer on duty
    pub fn officer(&self) -> &Security {
        &self.officer
    }

    /// Register a visitor against an existing employee
    ///
    /// The employee is looked up by name, approves the new visitor, and an
    /// ePass is issued. The visitor is stored under that ePass. An unknown
    /// employee leaves the registry untouched.
    #[instrument(
        skip(self, registry, details),
        fields(visitor = %details.name, employee = %details.employee_name)
    )]
    pub fn register_visitor(
        &mut self,
        registry: &mut Registry,
        details: VisitorDetails,
    ) -> DeskResult<RegistrationReceipt> {
        let employee = match registry.employee(&details.employee_name) {
            Some(employee) => employee,
            None => {
                warn!("Registration refused, employee not found");
                return Err(DeskError::EmployeeNotFound(details.employee_name));
            }
        };

        let mut visitor = Visitor::new(self.tokens.visitor_id(), details, Local::now());
        employee.approve_visitor(&mut visitor);
        let approved_by = employee.name().to_string();

        // An ePass is only issued to an approved visitor
        let epass = visitor.assign_epass(self.tokens.epass())?.clone();
        let receipt = RegistrationReceipt {
            visitor_id: visitor.id().clone(),
            visitor_name: visitor.name().to_string(),
            approved_by,
            epass: epass.clone(),
        };
        registry.insert_visitor(epass, visitor);

        info!(
            officer = self.officer.name(),
            visitor_id = %receipt.visitor_id,
            epass = %receipt.epass,
            "Visitor registered"
        );
        Ok(receipt)
    }

    /// Record a visitor's entry
    #[instrument(skip(self, registry))]
    pub fn check_in(&self, registry: &mut Registry, epass: &str) -> DeskResult<VisitEvent> {
        let visitor = Self::lookup(registry, epass)?;
        let at = visitor.check_in(Local::now()).map_err(|e| {
            warn!(visitor = visitor.name(), error = %e, "Check-in refused");
            e
        })?;

        info!(officer = self.officer.name(), visitor = visitor.name(), "Visitor checked in");
        Ok(VisitEvent { visitor_name: visitor.name().to_string(), epass: epass.to_string(), at })
    }

    /// Record a visitor's exit
    #[instrument(skip(self, registry))]
    pub fn check_out(&self, registry: &mut Registry, epass: &str) -> DeskResult<VisitEvent> {
        let visitor = Self::lookup(registry, epass)?;
        let at = visitor.check_out(Local::now()).map_err(|e| {
            warn!(visitor = visitor.name(), error = %e, "Check-out refused");
            e
        })?;

        info!(officer = self.officer.name(), visitor = visitor.name(), "Visitor checked out");
        Ok(VisitEvent { visitor_name: visitor.name().to_string(), epass: epass.to_string(), at })
    }

    fn lookup<'r>(registry: &'r mut Registry, epass: &str) -> DeskResult<&'r mut Visitor> {
        debug!(epass, "Looking up ePass");
        registry.visitor_mut(epass).ok_or_else(|| {
            warn!(epass, "Unknown ePass");
            DeskError::EPassNotFound(epass.to_string())
        })
    }
}
