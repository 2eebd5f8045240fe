//! Employee record and visitor decisions

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::types::EmployeeId;
use crate::user::{Identity, Visitor};

/// An employee who can receive visitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee ID and name
    pub identity: Identity<EmployeeId>,
}

impl Employee {
    /// Create a new employee
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self { identity: Identity::new(id, name) }
    }

    /// Employee ID
    pub fn id(&self) -> &EmployeeId {
        &self.identity.id
    }

    /// Employee name
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Approve a visitor coming to see this employee
    ///
    /// Always succeeds for a visitor that has not been denied.
    pub fn approve_visitor(&self, visitor: &mut Visitor) -> bool {
        let approved = visitor.approve();
        if approved {
            info!(visitor = visitor.name(), employee = self.name(), "Visitor approved");
        } else {
            warn!(
                visitor = visitor.name(),
                employee = self.name(),
                "Approval ignored for denied visitor"
            );
        }
        approved
    }

    /// Turn a visitor away
    ///
    /// The visitor ends in the terminal `Denied` state when still undecided;
    /// otherwise nothing changes.
    pub fn deny_visitor(&self, visitor: &mut Visitor) -> bool {
        let denied = visitor.deny();
        if denied {
            info!(visitor = visitor.name(), employee = self.name(), "Visitor denied");
        } else {
            warn!(
                visitor = visitor.name(),
                employee = self.name(),
                status = %visitor.status(),
                "Denial ignored, visitor already decided"
            );
        }
        denied
    }
}
