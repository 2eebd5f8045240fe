//! Front desk workflows
//!
//! This module contains the workflow layer that sits between the console and
//! the registry, plus error handling and logging setup.
//!
//! # Overview
//!
//! - **FrontDesk**: application context owning the registry and both services
//! - **SecurityService**: registration, check-in and check-out
//! - **EmployeeService**: bounded pre-approvals
//! - **DeskError**: typed failures whose messages are shown at the console
//! - **LoggingConfig**: tracing subscriber setup
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_pass_manager::service::*;
//! use visitor_pass_manager::types::AppConfig;
//! use visitor_pass_manager::user::VisitorDetails;
//!
//! let mut desk = FrontDesk::new(&AppConfig::default());
//! let receipt = desk
//!     .register_visitor(VisitorDetails::new("Bob", "Interview", "Alice", "Acme", "555-0100"))
//!     .unwrap();
//!
//! desk.check_in(receipt.epass.as_str()).unwrap();
//! assert!(matches!(
//!     desk.check_in("EPASS-00000"),
//!     Err(DeskError::EPassNotFound(_))
//! ));
//! ```

pub mod employee;
pub mod error;
pub mod front_desk;
pub mod logging;
pub mod security;

// Re-export all public types for convenience
pub use employee::*;
pub use error::*;
pub use front_desk::*;
pub use logging::*;
pub use security::*;
