//! Shared identity pair
//!
//! Every person the desk knows about carries an ID and a display name. Records
//! compose an [`Identity`] instead of inheriting from a common base.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ID and display name of a person known to the desk
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity<Id> {
    /// Identifier
    pub id: Id,
    /// Display name
    pub name: String,
}

impl<Id> Identity<Id> {
    /// Create a new identity
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl<Id: fmt::Display> fmt::Display for Identity<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}", self.id, self.name)
    }
}
