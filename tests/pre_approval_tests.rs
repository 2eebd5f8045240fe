//! Tests for bounded pre-approvals
//!
//! Each employee may hold up to the configured number of pre-approval tokens;
//! further requests are refused without changing the registry.

use std::collections::HashSet;
use visitor_pass_manager::service::{DeskError, ErrorKind, FrontDesk};
use visitor_pass_manager::types::{AppConfig, EPass, EmployeeId, StaffSeed};

fn desk_with_limit(limit: u32) -> FrontDesk {
    FrontDesk::new(&AppConfig {
        pre_approval_limit: limit,
        employees: vec![StaffSeed::new("E001", "Alice"), StaffSeed::new("E002", "Bob")],
        seed: Some(99),
        ..Default::default()
    })
}

/// Six requests against a limit of five: five tokens, then a refusal
#[test]
fn test_sixth_request_refused() {
    let mut desk = desk_with_limit(5);
    let alice = EmployeeId::new("E001");

    let mut issued = HashSet::new();
    for slot in 0..5 {
        let epass = desk.pre_approve("Alice", &format!("slot-{}", slot)).unwrap();
        assert!(EPass::is_well_formed(epass.as_str()));
        issued.insert(epass);
    }
    assert_eq!(issued.len(), 5);
    assert_eq!(desk.registry().pre_approval_count(&alice), 5);

    let err = desk.pre_approve("Alice", "slot-5").unwrap_err();
    assert!(matches!(
        err,
        DeskError::PreApprovalLimitReached { ref employee, limit: 5 } if employee == "Alice"
    ));
    assert_eq!(err.to_string(), "Pre-approval limit reached.");
    assert_eq!(err.kind(), ErrorKind::LimitExceeded);

    assert_eq!(desk.registry().pre_approval_count(&alice), 5);
    assert_eq!(desk.registry().pre_approval_total(), 5);
}

/// Each token remembers the slot it was issued for
#[test]
fn test_time_slots_recorded() {
    let mut desk = desk_with_limit(5);

    let morning = desk.pre_approve("Alice", "09:00-10:00").unwrap();
    let afternoon = desk.pre_approve("Alice", "14:00-15:00").unwrap();

    assert_eq!(desk.registry().time_slot(morning.as_str()), Some("09:00-10:00"));
    assert_eq!(desk.registry().time_slot(afternoon.as_str()), Some("14:00-15:00"));
}

/// Time slots are stored as given, including empty strings
#[test]
fn test_time_slot_is_free_text() {
    let mut desk = desk_with_limit(5);

    let epass = desk.pre_approve("Alice", "").unwrap();
    assert_eq!(desk.registry().time_slot(epass.as_str()), Some(""));
}

/// Limits are counted per employee
#[test]
fn test_limit_is_per_employee() {
    let mut desk = desk_with_limit(1);

    desk.pre_approve("Alice", "a").unwrap();
    assert!(desk.pre_approve("Alice", "b").is_err());

    desk.pre_approve("Bob", "a").unwrap();
    assert_eq!(desk.registry().pre_approval_count(&EmployeeId::new("E002")), 1);
}

/// A zero limit refuses every request
#[test]
fn test_zero_limit() {
    let mut desk = desk_with_limit(0);

    assert!(matches!(
        desk.pre_approve("Alice", "any"),
        Err(DeskError::PreApprovalLimitReached { limit: 0, .. })
    ));
    assert_eq!(desk.registry().pre_approval_total(), 0);
}

/// Unknown employees cannot pre-approve
#[test]
fn test_unknown_employee() {
    let mut desk = desk_with_limit(5);

    let err = desk.pre_approve("Mallory", "noon").unwrap_err();
    assert!(matches!(err, DeskError::EmployeeNotFound(_)));
    assert_eq!(desk.registry().pre_approval_total(), 0);
}

/// Raising the limit mid-session lets a capped employee continue
#[test]
fn test_admin_raises_limit() {
    let mut desk = desk_with_limit(1);

    desk.pre_approve("Alice", "a").unwrap();
    assert!(desk.pre_approve("Alice", "b").is_err());

    desk.set_pre_approval_limit(2);
    desk.pre_approve("Alice", "b").unwrap();
    assert!(desk.pre_approve("Alice", "c").is_err());
}

/// Same seed, same tokens
#[test]
fn test_seeded_tokens_reproducible() {
    let mut a = desk_with_limit(3);
    let mut b = desk_with_limit(3);

    for slot in ["x", "y", "z"] {
        assert_eq!(a.pre_approve("Alice", slot).unwrap(), b.pre_approve("Alice", slot).unwrap());
    }
}
