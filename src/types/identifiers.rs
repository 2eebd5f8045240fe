//! Identifier types for the visitor pass manager
//!
//! This module contains the string-backed identifier types for employees,
//! visitors and ePasses used throughout the front desk.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use super::config::tokens;

/// Identifier of an employee, e.g. `E001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    /// Create an employee ID from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a registered visitor (random alphanumeric token)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(pub String);

impl VisitorId {
    /// Create a visitor ID from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Electronic pass handed to a visitor, of the form `EPASS-XXXXX`
///
/// The ePass is the only handle used for check-in and check-out lookups, so
/// the registry keys visitors by it. `Borrow<str>` lets lookups use the raw
/// text typed at the console without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EPass(String);

impl EPass {
    /// Build an ePass from its random suffix
    pub fn from_suffix(suffix: &str) -> Self {
        Self(format!("{}{}", tokens::EPASS_PREFIX, suffix))
    }

    /// Borrow the full ePass text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The random part after the `EPASS-` prefix
    pub fn suffix(&self) -> &str {
        self.0.strip_prefix(tokens::EPASS_PREFIX).unwrap_or(&self.0)
    }

    /// Check whether a string has the exact ePass shape
    pub fn is_well_formed(s: &str) -> bool {
        match s.strip_prefix(tokens::EPASS_PREFIX) {
            Some(suffix) => {
                suffix.len() == tokens::EPASS_SUFFIX_LENGTH
                    && suffix.chars().all(|c| c.is_ascii_alphanumeric())
            }
            None => false,
        }
    }
}

impl fmt::Display for EPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for EPass {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for EPass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if Self::is_well_formed(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("Malformed ePass: {}", s))
        }
    }
}

impl Serialize for EPass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EPass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
