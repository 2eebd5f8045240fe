//! Registry of employees, visitors and pre-approvals
//!
//! This module contains the [`Registry`] struct, which owns every record the
//! desk creates during a run and provides keyed lookups over them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::registry::RegistryStatistics;
use crate::types::{EPass, EmployeeId, VisitorStatus};
use crate::user::{Employee, Visitor};

/// In-memory store for everything the desk knows
///
/// Four independent maps: employees by name, visitors by ePass, pre-approved
/// time slots by ePass, and pre-approval counts by employee ID. Records are
/// owned values and are released when the registry is dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    employees: HashMap<String, Employee>,
    visitors: HashMap<EPass, Visitor>,
    pre_approved: HashMap<EPass, String>,
    pre_approval_counts: HashMap<EmployeeId, u32>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee, keyed by name
    ///
    /// Returns the employee previously stored under the same name, if any.
    pub fn add_employee(&mut self, employee: Employee) -> Option<Employee> {
        debug!(employee = employee.name(), id = %employee.id(), "Adding employee");
        self.employees.insert(employee.name().to_string(), employee)
    }

    /// Get an employee by name
    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.employees.get(name)
    }

    /// Check whether an employee with this name exists
    pub fn contains_employee(&self, name: &str) -> bool {
        self.employees.contains_key(name)
    }

    /// Store a visitor under the ePass it was issued
    ///
    /// Returns the visitor previously stored under the same ePass, if any.
    pub fn insert_visitor(&mut self, epass: EPass, visitor: Visitor) -> Option<Visitor> {
        debug!(epass = %epass, visitor = visitor.name(), "Storing visitor");
        self.visitors.insert(epass, visitor)
    }

    /// Get a visitor by ePass
    pub fn visitor(&self, epass: &str) -> Option<&Visitor> {
        self.visitors.get(epass)
    }

    /// Get a visitor by ePass for a lifecycle update
    pub fn visitor_mut(&mut self, epass: &str) -> Option<&mut Visitor> {
        self.visitors.get_mut(epass)
    }

    /// All visitors, in no particular order
    pub fn visitors(&self) -> impl Iterator<Item = &Visitor> {
        self.visitors.values()
    }

    /// Record a pre-approved time slot under its token
    pub fn record_pre_approval(&mut self, epass: EPass, time_slot: impl Into<String>) {
        self.pre_approved.insert(epass, time_slot.into());
    }

    /// Time slot recorded for a pre-approval token
    pub fn time_slot(&self, epass: &str) -> Option<&str> {
        self.pre_approved.get(epass).map(String::as_str)
    }

    /// Number of pre-approvals an employee has requested so far
    pub fn pre_approval_count(&self, employee_id: &EmployeeId) -> u32 {
        self.pre_approval_counts.get(employee_id).copied().unwrap_or(0)
    }

    /// Bump an employee's pre-approval count, returning the new value
    pub fn increment_pre_approval_count(&mut self, employee_id: &EmployeeId) -> u32 {
        let count = self.pre_approval_counts.entry(employee_id.clone()).or_insert(0);
        *count += 1;
        *count
    }

    /// Total number of employees
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Total number of visitors
    pub fn visitor_count(&self) -> usize {
        self.visitors.len()
    }

    /// Total number of pre-approval tokens issued
    pub fn pre_approval_total(&self) -> usize {
        self.pre_approved.len()
    }

    /// Summarize registry contents
    pub fn statistics(&self) -> RegistryStatistics {
        let mut stats = RegistryStatistics {
            employees: self.employee_count(),
            visitors: self.visitor_count(),
            pre_approvals: self.pre_approval_total(),
            ..Default::default()
        };

        for visitor in self.visitors() {
            match visitor.status() {
                VisitorStatus::Registered => stats.awaiting_decision += 1,
                VisitorStatus::Approved => stats.approved += 1,
                VisitorStatus::CheckedIn => stats.checked_in += 1,
                VisitorStatus::CheckedOut => stats.checked_out += 1,
                VisitorStatus::Denied => stats.denied += 1,
            }
        }

        stats
    }

    /// Empty every store
    pub fn cleanup(&mut self) {
        info!(
            employees = self.employees.len(),
            visitors = self.visitors.len(),
            pre_approvals = self.pre_approved.len(),
            "Clearing registry"
        );
        self.employees.clear();
        self.visitors.clear();
        self.pre_approved.clear();
        self.pre_approval_counts.clear();
    }

    /// Whether every store is empty
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
            && self.visitors.is_empty()
            && self.pre_approved.is_empty()
            && self.pre_approval_counts.is_empty()
    }
}
