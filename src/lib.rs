//! Visitor Pass Manager
//!
//! A front desk for registering building visitors, issuing ePasses, and
//! tracking check-in and check-out.
//!
//! # Overview
//!
//! A visitor is registered against a host employee who approves the visit.
//! Security then issues an ePass, which the visitor presents at check-in and
//! check-out. Employees may also request a bounded number of pre-approval
//! ePasses for future time slots.
//!
//! ## Key Features
//!
//! - **Visitor Lifecycle**: registered, approved, checked in, checked out or denied
//! - **ePass Issuance**: random `EPASS-XXXXX` tokens, reproducible with a seed
//! - **Pre-Approvals**: per-employee limit set by the administrator
//! - **Console Menu**: scriptable text menu over any reader and writer
//!
//! ## Quick Start
//!
//! ```rust
//! use visitor_pass_manager::*;
//!
//! let mut desk = FrontDesk::new(&AppConfig::default());
//!
//! let receipt = desk.register_visitor(VisitorDetails::new(
//!     "Bob", "Interview", "Alice", "Acme", "555-0100",
//! ))?;
//! desk.check_in(receipt.epass.as_str())?;
//!
//! let stats = desk.statistics();
//! assert_eq!(stats.checked_in, 1);
//! # Ok::<(), DeskError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, tokens, enums and configuration
//! - [`user`]: employees, visitors, security and admin roles
//! - [`registry`]: in-memory storage of employees, visitors and pre-approvals
//! - [`service`]: desk workflows, errors and logging
//! - [`shell`]: interactive console menu
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Shell     │───►│   Service   │───►│  Registry   │
//! │             │    │             │    │             │
//! │ Main Menu   │    │ Front Desk  │    │ Employees   │
//! │ Messages    │    │ Security    │    │ Visitors    │
//! │             │    │ Employee    │    │ Slots       │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!                            │                   │
//!                            ▼                   ▼
//!                    ┌─────────────┐    ┌─────────────┐
//!                    │    User     │───►│   Types     │
//!                    │             │    │             │
//!                    │ Visitor     │    │ Identifiers │
//!                    │ Employee    │    │ Tokens      │
//!                    │ Staff       │    │ Config      │
//!                    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod registry;
pub mod service;
pub mod shell;
pub mod types;
pub mod user;

// Core types and identifiers
pub use types::{
    AppConfig, CliArgs, ConfigError, ConfigValidationError, EPass, EmployeeId, MenuChoice,
    StaffSeed, TokenGenerator, VisitorId, VisitorStatus,
};

// Users and roles
pub use user::{Admin, Employee, Identity, LifecycleError, Security, Visitor, VisitorDetails};

// Storage
pub use registry::{Registry, RegistryStatistics};

// Workflows
pub use service::{
    DeskError, DeskResult, EmployeeService, ErrorKind, FrontDesk, LoggingConfig, LoggingGuard,
    RegistrationReceipt, SecurityService, VisitEvent,
};

// Console
pub use shell::MainMenu;
