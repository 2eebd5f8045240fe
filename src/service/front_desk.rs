//! Front desk application context
//!
//! This module contains the FrontDesk, which owns the registry and the two
//! workflow services for the lifetime of a run.

use tracing::{info, instrument};

use crate::registry::{Registry, RegistryStatistics};
use crate::service::{
    DeskResult, EmployeeService, RegistrationReceipt, SecurityService, VisitEvent,
};
use crate::types::{AppConfig, EPass, EmployeeId, TokenGenerator};
use crate::user::{Admin, Employee, Security, VisitorDetails};

/// Everything one desk session needs, constructed explicitly from config
#[derive(Debug)]
pub struct FrontDesk {
    registry: Registry,
    security: SecurityService,
    employees: EmployeeService,
    admin: Admin,
}

impl FrontDesk {
    /// Build a desk from configuration, seeding the employee roster
    #[instrument(
        skip(config),
        fields(employees = config.employees.len(), limit = config.pre_approval_limit)
    )]
    pub fn new(config: &AppConfig) -> Self {
        let mut registry = Registry::new();
        for seed in &config.employees {
            let employee = Employee::new(EmployeeId::new(seed.id.as_str()), seed.name.as_str());
            registry.add_employee(employee);
        }

        let mut admin = Admin::new(config.admin.id.as_str(), config.admin.name.as_str());
        admin.set_pre_approval_limit(config.pre_approval_limit);

        // Distinct streams so registrations and pre-approvals don't share tokens
        let security_tokens = TokenGenerator::from_optional_seed(config.seed);
        let employee_tokens =
            TokenGenerator::from_optional_seed(config.seed.map(|s| s.wrapping_add(1)));

        let officer = Security::new(
            config.security_officer.id.as_str(),
            config.security_officer.name.as_str(),
        );
        info!(
            officer = officer.name(),
            admin = admin.name(),
            employees = registry.employee_count(),
            "Front desk opened"
        );

        Self {
            security: SecurityService::new(officer, security_tokens),
            employees: EmployeeService::new(admin.pre_approval_limit(), employee_tokens),
            registry,
            admin,
        }
    }

    /// Read-only view of the registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Officer on duty
    pub fn officer(&self) -> &Security {
        self.security.officer()
    }

    /// Administrator of this desk
    pub fn admin(&self) -> &Admin {
        &self.admin
    }

    /// Register a visitor; see [`SecurityService::register_visitor`]
    pub fn register_visitor(&mut self, details: VisitorDetails) -> DeskResult<RegistrationReceipt> {
        self.security.register_visitor(&mut self.registry, details)
    }

    /// Check a visitor in by ePass
    pub fn check_in(&mut self, epass: &str) -> DeskResult<VisitEvent> {
        self.security.check_in(&mut self.registry, epass)
    }

    /// Check a visitor out by ePass
    pub fn check_out(&mut self, epass: &str) -> DeskResult<VisitEvent> {
        self.security.check_out(&mut self.registry, epass)
    }

    /// Issue a pre-approval for the named employee
    pub fn pre_approve(&mut self, employee_name: &str, time_slot: &str) -> DeskResult<EPass> {
        self.employees.pre_approve_by_name(&mut self.registry, employee_name, time_slot)
    }

    /// Current per-employee pre-approval limit
    pub fn pre_approval_limit(&self) -> u32 {
        self.employees.limit()
    }

    /// Have the administrator change the pre-approval limit
    pub fn set_pre_approval_limit(&mut self, limit: u32) {
        self.admin.set_pre_approval_limit(limit);
        self.employees.set_limit(self.admin.pre_approval_limit());
    }

    /// Summarize the session so far
    pub fn statistics(&self) -> RegistryStatistics {
        self.registry.statistics()
    }

    /// Close the desk, returning the final statistics
    pub fn close(mut self) -> RegistryStatistics {
        let stats = self.registry.statistics();
        self.registry.cleanup();
        info!(summary = %stats.compact_summary(), "Front desk closed");
        stats
    }
}
