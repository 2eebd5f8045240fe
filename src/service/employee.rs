//! Pre-approval workflow
//!
//! Employees may hand out a bounded number of pre-approval tokens, each tied
//! to a time slot. The tokens are stored in the registry but are not linked to
//! any visitor record and cannot be redeemed at check-in.

use tracing::{info, instrument, warn};

use crate::registry::Registry;
use crate::service::{DeskError, DeskResult};
use crate::types::{EPass, TokenGenerator};
use crate::user::Employee;

/// Issues pre-approvals within the per-employee limit
#[derive(Debug)]
pub struct EmployeeService {
    limit: u32,
    tokens: TokenGenerator,
}

impl EmployeeService {
    /// Create a service enforcing `limit` pre-approvals per employee
    pub fn new(limit: u32, tokens: TokenGenerator) -> Self {
        Self { limit, tokens }
    }

    /// Current per-employee limit
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Change the per-employee limit; existing counts are kept
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    /// Issue a pre-approval token for `employee` covering `time_slot`
    ///
    /// Fails with [`DeskError::PreApprovalLimitReached`] without touching the
    /// registry once the employee's count has reached the limit.
    #[instrument(skip(self, registry, employee), fields(employee = employee.name()))]
    pub fn pre_approve(
        &mut self,
        registry: &mut Registry,
        employee: &Employee,
        time_slot: &str,
    ) -> DeskResult<EPass> {
        let used = registry.pre_approval_count(employee.id());
        if used >= self.limit {
            warn!(used, limit = self.limit, "Pre-approval limit reached");
            return Err(DeskError::PreApprovalLimitReached {
                employee: employee.name().to_string(),
                limit: self.limit,
            });
        }

        let epass = self.tokens.epass();
        registry.record_pre_approval(epass.clone(), time_slot);
        let used = registry.increment_pre_approval_count(employee.id());

        info!(epass = %epass, time_slot, used, limit = self.limit, "Pre-approval issued");
        Ok(epass)
    }

    /// Resolve the employee by name, then issue a pre-approval
    pub fn pre_approve_by_name(
        &mut self,
        registry: &mut Registry,
        employee_name: &str,
        time_slot: &str,
    ) -> DeskResult<EPass> {
        let employee = registry
            .employee(employee_name)
            .cloned()
            .ok_or_else(|| DeskError::EmployeeNotFound(employee_name.to_string()))?;
        self.pre_approve(registry, &employee, time_slot)
    }
}
