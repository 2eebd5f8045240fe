//! Core types and identifiers for the visitor pass manager
//!
//! This module contains fundamental types, identifiers, token generation and
//! configuration structures used throughout the front desk.
//!
//! # Overview
//!
//! - **Identifiers**: typed IDs for employees and visitors, and the `EPass`
//! - **Tokens**: random alphanumeric tokens for visitor IDs and ePasses
//! - **Enums**: visitor lifecycle states and menu choices
//! - **Configuration**: desk configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_pass_manager::types::*;
//!
//! let mut tokens = TokenGenerator::with_seed(7);
//! let epass = tokens.epass();
//! assert!(EPass::is_well_formed(epass.as_str()));
//!
//! let config = AppConfig { pre_approval_limit: 3, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod token;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use token::*;
