//! People known to the front desk
//!
//! This module contains the records for everyone the desk deals with.
//!
//! # Overview
//!
//! - **Identity**: the ID/name pair every record carries
//! - **Employee**: receives visitors and approves or denies them
//! - **Visitor**: visitor details plus the approval/check-in lifecycle
//! - **Security**: officer on duty at the desk
//! - **Admin**: sets the per-employee pre-approval limit
//!
//! The records share no behavior beyond their identity, so they are plain
//! structs composed with [`Identity`] rather than variants of one type.
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_pass_manager::user::*;
//! use visitor_pass_manager::types::*;
//! use chrono::Local;
//!
//! let alice = Employee::new(EmployeeId::new("E001"), "Alice");
//! let mut bob = Visitor::new(
//!     VisitorId::new("Xy12Ab34"),
//!     VisitorDetails::new("Bob", "Interview", "Alice", "Acme", "bob@acme.test"),
//!     Local::now(),
//! );
//!
//! assert!(alice.approve_visitor(&mut bob));
//! assert_eq!(bob.status(), VisitorStatus::Approved);
//! ```

pub mod employee;
pub mod identity;
pub mod staff;
pub mod visitor;

// Re-export all public types for convenience
pub use employee::Employee;
pub use identity::Identity;
pub use staff::{Admin, Security};
pub use visitor::{LifecycleError, Visitor, VisitorDetails};
