//! Record storage for the front desk
//!
//! The [`Registry`] owns every employee, visitor and pre-approval created
//! during a run. It is an ordinary value owned by the front desk and passed by
//! reference into the workflow services; nothing is global.
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_pass_manager::registry::Registry;
//! use visitor_pass_manager::types::EmployeeId;
//! use visitor_pass_manager::user::Employee;
//!
//! let mut registry = Registry::new();
//! registry.add_employee(Employee::new(EmployeeId::new("E001"), "Alice"));
//!
//! assert!(registry.contains_employee("Alice"));
//! assert_eq!(registry.statistics().employees, 1);
//! ```

pub mod database;
pub mod statistics;

pub use database::Registry;
pub use statistics::RegistryStatistics;
