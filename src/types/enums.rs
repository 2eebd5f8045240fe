//! Enumeration types for the visitor pass manager
//!
//! This module contains the visitor lifecycle states and the front desk menu
//! choices.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitorStatus {
    /// Record created, waiting for an employee decision
    Registered,
    /// Approved by the visiting employee; an ePass is issued
    Approved,
    /// Inside the premises
    CheckedIn,
    /// Left the premises
    CheckedOut,
    /// Turned away by the visiting employee (terminal)
    Denied,
}

impl VisitorStatus {
    /// Whether no further transition is possible from this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, VisitorStatus::Denied)
    }
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisitorStatus::Registered => write!(f, "Registered"),
            VisitorStatus::Approved => write!(f, "Approved"),
            VisitorStatus::CheckedIn => write!(f, "Checked In"),
            VisitorStatus::CheckedOut => write!(f, "Checked Out"),
            VisitorStatus::Denied => write!(f, "Denied"),
        }
    }
}

/// Entries of the front desk menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    /// 1. Register Visitor
    RegisterVisitor,
    /// 2. Check-in Visitor
    CheckIn,
    /// 3. Pre-Approve Visitor
    PreApprove,
    /// 4. Check-out Visitor
    CheckOut,
    /// 5. Exit
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::RegisterVisitor,
        MenuChoice::CheckIn,
        MenuChoice::PreApprove,
        MenuChoice::CheckOut,
        MenuChoice::Exit,
    ];

    /// Number typed at the prompt to select this choice
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::RegisterVisitor => 1,
            MenuChoice::CheckIn => 2,
            MenuChoice::PreApprove => 3,
            MenuChoice::CheckOut => 4,
            MenuChoice::Exit => 5,
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::RegisterVisitor => write!(f, "Register Visitor"),
            MenuChoice::CheckIn => write!(f, "Check-in Visitor"),
            MenuChoice::PreApprove => write!(f, "Pre-Approve Visitor"),
            MenuChoice::CheckOut => write!(f, "Check-out Visitor"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::RegisterVisitor),
            "2" => Ok(MenuChoice::CheckIn),
            "3" => Ok(MenuChoice::PreApprove),
            "4" => Ok(MenuChoice::CheckOut),
            "5" => Ok(MenuChoice::Exit),
            other => Err(format!("Unknown menu choice: {}", other)),
        }
    }
}
