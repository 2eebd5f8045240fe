//! Registry statistics
//!
//! Snapshot of what the desk handled during a run, printed when the desk
//! closes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Counts of registry contents, with visitors broken down by status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStatistics {
    /// Employees known to the desk
    pub employees: usize,
    /// Visitors holding an ePass
    pub visitors: usize,
    /// Visitors still waiting for a decision
    pub awaiting_decision: usize,
    /// Approved visitors who have not entered yet
    pub approved: usize,
    /// Visitors currently inside
    pub checked_in: usize,
    /// Visitors who have left
    pub checked_out: usize,
    /// Visitors turned away
    pub denied: usize,
    /// Pre-approval tokens issued
    pub pre_approvals: usize,
}

impl RegistryStatistics {
    /// Percentage of visitors that have checked in at least once
    pub fn attendance_percentage(&self) -> f64 {
        if self.visitors == 0 {
            0.0
        } else {
            (self.checked_in + self.checked_out) as f64 / self.visitors as f64 * 100.0
        }
    }

    /// One-line summary
    pub fn compact_summary(&self) -> String {
        format!(
            "{} visitors ({} inside, {} left), {} pre-approvals",
            self.visitors, self.checked_in, self.checked_out, self.pre_approvals
        )
    }
}

impl fmt::Display for RegistryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session Summary")?;
        writeln!(f, "===============")?;
        writeln!(f, "  Employees: {}", self.employees)?;
        writeln!(f, "  Visitors Registered: {}", self.visitors)?;
        writeln!(f, "    Not Yet Arrived: {}", self.approved + self.awaiting_decision)?;
        writeln!(f, "    Checked In: {}", self.checked_in)?;
        writeln!(f, "    Checked Out: {}", self.checked_out)?;
        if self.denied > 0 {
            writeln!(f, "    Denied: {}", self.denied)?;
        }
        writeln!(f, "  Attendance: {:.1}%", self.attendance_percentage())?;
        write!(f, "  Pre-Approvals Issued: {}", self.pre_approvals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendance_percentage() {
        let empty = RegistryStatistics::default();
        assert_eq!(empty.attendance_percentage(), 0.0);

        let stats = RegistryStatistics {
            visitors: 4,
            approved: 1,
            checked_in: 2,
            checked_out: 1,
            ..Default::default()
        };
        assert_eq!(stats.attendance_percentage(), 75.0);
    }

    #[test]
    fn test_display_output() {
        let stats = RegistryStatistics {
            employees: 1,
            visitors: 2,
            checked_in: 1,
            approved: 1,
            pre_approvals: 3,
            ..Default::default()
        };
        let text = stats.to_string();

        assert!(text.starts_with("Session Summary"));
        assert!(text.contains("Visitors Registered: 2"));
        assert!(text.contains("Attendance: 50.0%"));
        assert!(text.contains("Pre-Approvals Issued: 3"));
        assert!(!text.contains("Denied"));
        assert_eq!(stats.compact_summary(), "2 visitors (1 inside, 0 left), 3 pre-approvals");
    }
}
