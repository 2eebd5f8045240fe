//! Security officer and administrator records

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::DEFAULT_PRE_APPROVAL_LIMIT;
use crate::user::Identity;

/// Security officer on duty at the front desk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Security {
    /// Officer ID and name
    pub identity: Identity<String>,
}

impl Security {
    /// Create a security officer
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { identity: Identity::new(id.into(), name) }
    }

    /// Officer name
    pub fn name(&self) -> &str {
        &self.identity.name
    }
}

/// Administrator controlling desk policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Administrator ID and name
    pub identity: Identity<String>,
    pre_approval_limit: u32,
}

impl Admin {
    /// Create an administrator with the default pre-approval limit
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(id.into(), name),
            pre_approval_limit: DEFAULT_PRE_APPROVAL_LIMIT,
        }
    }

    /// Administrator name
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    /// Set how many pre-approvals each employee may hold
    pub fn set_pre_approval_limit(&mut self, limit: u32) {
        self.pre_approval_limit = limit;
        info!(admin = self.name(), limit, "Pre-approval limit set to {}", limit);
    }

    /// Current pre-approval limit
    pub fn pre_approval_limit(&self) -> u32 {
        self.pre_approval_limit
    }
}
