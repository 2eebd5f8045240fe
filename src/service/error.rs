//! Error types and handling
//!
//! This module contains the error type returned by the front desk workflows.
//! Display strings are the messages shown to the person at the console.

use thiserror::Error;

use crate::user::LifecycleError;

/// Broad failure classes of desk operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Employee or ePass absent from the registry
    NotFound,
    /// Lifecycle transition not allowed in the visitor's current state
    PreconditionFailed,
    /// Employee already holds the maximum number of pre-approvals
    LimitExceeded,
    /// Console I/O failed; the session cannot continue
    Internal,
}

/// Errors that can occur during front desk operations
#[derive(Debug, Error)]
pub enum DeskError {
    /// No employee with this name
    #[error("Employee not found.")]
    EmployeeNotFound(String),

    /// No visitor holds this ePass
    #[error("ePass not found.")]
    EPassNotFound(String),

    /// Pre-approval cap reached for this employee
    #[error("Pre-approval limit reached.")]
    PreApprovalLimitReached {
        /// Employee name
        employee: String,
        /// Configured cap
        limit: u32,
    },

    /// Rejected visitor lifecycle transition
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeskError {
    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeskError::EmployeeNotFound(_) | DeskError::EPassNotFound(_) => ErrorKind::NotFound,
            DeskError::Lifecycle(_) => ErrorKind::PreconditionFailed,
            DeskError::PreApprovalLimitReached { .. } => ErrorKind::LimitExceeded,
            DeskError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Check if the desk can keep serving after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Internal)
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            DeskError::EmployeeNotFound(_) => "Employee Lookup",
            DeskError::EPassNotFound(_) => "ePass Lookup",
            DeskError::PreApprovalLimitReached { .. } => "Pre-Approval",
            DeskError::Lifecycle(_) => "Visitor Lifecycle",
            DeskError::Io(_) => "IO",
        }
    }
}

/// Result type for desk operations
pub type DeskResult<T> = Result<T, DeskError>;
