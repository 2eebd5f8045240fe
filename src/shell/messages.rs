//! Console wording
//!
//! Every line the shell prints for a successful operation is built here.
//! Failures print the `Display` of [`crate::service::DeskError`].

use chrono::{DateTime, Local};

use crate::service::{RegistrationReceipt, VisitEvent};
use crate::types::{EPass, MenuChoice};

/// Render a timestamp the way the desk has always shown it,
/// e.g. `Tue Mar  4 09:15:02 2025`
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%a %b %e %H:%M:%S %Y").to_string()
}

/// The numbered menu
pub fn menu() -> String {
    let mut text = String::from("\n");
    for choice in MenuChoice::ALL {
        text.push_str(&format!("{}. {}\n", choice.number(), choice));
    }
    text
}

/// Lines printed after a successful registration
pub fn registered(receipt: &RegistrationReceipt) -> String {
    format!(
        "Visitor {} approved by {}\nVisitor registered with ePass: {}",
        receipt.visitor_name, receipt.approved_by, receipt.epass
    )
}

/// Line printed after a check-in
pub fn checked_in(event: &VisitEvent) -> String {
    format!("Visitor {} checked in at {}", event.visitor_name, format_timestamp(&event.at))
}

/// Line printed after a check-out
pub fn checked_out(event: &VisitEvent) -> String {
    format!("Visitor {} checked out at {}", event.visitor_name, format_timestamp(&event.at))
}

/// Line printed after a pre-approval
pub fn pre_approved(epass: &EPass) -> String {
    format!("Pre-approved visitor with ePass: {}", epass)
}

/// Line printed for an unrecognized menu entry
pub const INVALID_CHOICE: &str = "Invalid choice.";
