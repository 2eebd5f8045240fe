//! Tests for the register, check-in and check-out workflow
//!
//! These tests drive the desk through its public API the way the console does.

use visitor_pass_manager::service::{DeskError, ErrorKind, FrontDesk};
use visitor_pass_manager::types::{AppConfig, EPass, StaffSeed, VisitorStatus};
use visitor_pass_manager::user::{LifecycleError, VisitorDetails};

fn desk() -> FrontDesk {
    FrontDesk::new(&AppConfig { seed: Some(2024), ..Default::default() })
}

fn bob() -> VisitorDetails {
    VisitorDetails::new("Bob", "Interview", "Alice", "Acme", "555-0100")
}

/// A full visit: register, check in, check out
#[test]
fn test_full_visit() {
    let mut desk = desk();

    let receipt = desk.register_visitor(bob()).unwrap();
    assert_eq!(receipt.visitor_name, "Bob");
    assert_eq!(receipt.approved_by, "Alice");
    assert!(EPass::is_well_formed(receipt.epass.as_str()));
    assert_eq!(receipt.visitor_id.as_str().len(), 8);

    let entered = desk.check_in(receipt.epass.as_str()).unwrap();
    assert_eq!(entered.visitor_name, "Bob");
    assert_eq!(
        desk.registry().visitor(receipt.epass.as_str()).unwrap().status(),
        VisitorStatus::CheckedIn
    );

    let left = desk.check_out(receipt.epass.as_str()).unwrap();
    assert!(left.at >= entered.at);

    let visitor = desk.registry().visitor(receipt.epass.as_str()).unwrap();
    assert_eq!(visitor.status(), VisitorStatus::CheckedOut);
    assert_eq!(visitor.check_in_time(), Some(entered.at));
    assert_eq!(visitor.check_out_time(), Some(left.at));
}

/// Registration against an unknown employee stores nothing
#[test]
fn test_unknown_employee_rejected() {
    let mut desk = desk();
    let details = VisitorDetails::new("Bob", "Interview", "Mallory", "Acme", "555-0100");

    let err = desk.register_visitor(details).unwrap_err();
    assert!(matches!(err, DeskError::EmployeeNotFound(ref name) if name == "Mallory"));
    assert_eq!(err.to_string(), "Employee not found.");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(desk.registry().visitor_count(), 0);
}

/// Employee names are matched exactly
#[test]
fn test_employee_lookup_is_case_sensitive() {
    let mut desk = desk();
    let details = VisitorDetails::new("Bob", "Interview", "alice", "Acme", "555-0100");

    assert!(matches!(desk.register_visitor(details), Err(DeskError::EmployeeNotFound(_))));
}

/// Each registration gets its own ePass and record
#[test]
fn test_visitors_get_distinct_epasses() {
    let mut desk = desk();

    let first = desk.register_visitor(bob()).unwrap();
    let second = desk
        .register_visitor(VisitorDetails::new("Carol", "Delivery", "Alice", "Parcel Co", "n/a"))
        .unwrap();

    assert_ne!(first.epass, second.epass);
    assert_eq!(desk.registry().visitor_count(), 2);
    assert_eq!(desk.registry().visitor(second.epass.as_str()).unwrap().name(), "Carol");
}

/// The same person registered twice is two independent visits
#[test]
fn test_duplicate_registration_is_separate_visit() {
    let mut desk = desk();

    let first = desk.register_visitor(bob()).unwrap();
    let second = desk.register_visitor(bob()).unwrap();

    assert_ne!(first.epass, second.epass);
    desk.check_in(first.epass.as_str()).unwrap();
    assert_eq!(
        desk.registry().visitor(second.epass.as_str()).unwrap().status(),
        VisitorStatus::Approved
    );
}

/// Unknown ePasses fail both check-in and check-out
#[test]
fn test_unknown_epass() {
    let mut desk = desk();
    desk.register_visitor(bob()).unwrap();

    let err = desk.check_in("EPASS-nope0").unwrap_err();
    assert_eq!(err.to_string(), "ePass not found.");
    assert!(err.is_recoverable());

    assert!(matches!(desk.check_out("EPASS-nope0"), Err(DeskError::EPassNotFound(_))));
}

/// ePass lookup does not trim or normalize input
#[test]
fn test_epass_lookup_is_exact() {
    let mut desk = desk();
    let receipt = desk.register_visitor(bob()).unwrap();

    let padded = format!(" {}", receipt.epass);
    assert!(desk.check_in(&padded).is_err());
    assert!(desk.check_in(&receipt.epass.as_str().to_lowercase()).is_err());
}

/// Checking out before checking in is refused and changes nothing
#[test]
fn test_check_out_before_check_in() {
    let mut desk = desk();
    let receipt = desk.register_visitor(bob()).unwrap();

    let err = desk.check_out(receipt.epass.as_str()).unwrap_err();
    assert!(matches!(err, DeskError::Lifecycle(LifecycleError::NotCheckedIn)));
    assert_eq!(err.to_string(), "Visitor has not checked in yet.");
    assert_eq!(err.kind(), ErrorKind::PreconditionFailed);

    let visitor = desk.registry().visitor(receipt.epass.as_str()).unwrap();
    assert_eq!(visitor.status(), VisitorStatus::Approved);
    assert!(visitor.check_out_time().is_none());
}

/// A visitor who left can come back on the same pass
#[test]
fn test_re_entry_after_check_out() {
    let mut desk = desk();
    let receipt = desk.register_visitor(bob()).unwrap();
    let epass = receipt.epass.as_str();

    desk.check_in(epass).unwrap();
    let left = desk.check_out(epass).unwrap();
    let back = desk.check_in(epass).unwrap();

    let visitor = desk.registry().visitor(epass).unwrap();
    assert_eq!(visitor.status(), VisitorStatus::CheckedIn);
    assert_eq!(visitor.check_in_time(), Some(back.at));
    // The earlier exit stays on record
    assert_eq!(visitor.check_out_time(), Some(left.at));
}

/// Pre-approval tokens are not visitor passes
#[test]
fn test_pre_approval_token_cannot_check_in() {
    let mut desk = desk();
    let token = desk.pre_approve("Alice", "10:00-11:00").unwrap();

    assert_eq!(desk.registry().time_slot(token.as_str()), Some("10:00-11:00"));
    assert!(matches!(desk.check_in(token.as_str()), Err(DeskError::EPassNotFound(_))));
}

/// Registrations can target any employee on a custom roster
#[test]
fn test_custom_roster() {
    let config = AppConfig {
        employees: vec![StaffSeed::new("E001", "Alice"), StaffSeed::new("E002", "Dave")],
        ..Default::default()
    };
    let mut desk = FrontDesk::new(&config);

    let receipt = desk
        .register_visitor(VisitorDetails::new("Eve", "Pentest", "Dave", "Red Team", "n/a"))
        .unwrap();
    assert_eq!(receipt.approved_by, "Dave");
}

/// Statistics follow the lifecycle
#[test]
fn test_statistics_track_visits() {
    let mut desk = desk();
    let a = desk.register_visitor(bob()).unwrap();
    let b = desk.register_visitor(bob()).unwrap();
    desk.register_visitor(bob()).unwrap();

    desk.check_in(a.epass.as_str()).unwrap();
    desk.check_in(b.epass.as_str()).unwrap();
    desk.check_out(b.epass.as_str()).unwrap();
    desk.pre_approve("Alice", "noon").unwrap();

    let stats = desk.close();
    assert_eq!(stats.visitors, 3);
    assert_eq!(stats.approved, 1);
    assert_eq!(stats.checked_in, 1);
    assert_eq!(stats.checked_out, 1);
    assert_eq!(stats.denied, 0);
    assert_eq!(stats.pre_approvals, 1);
}
