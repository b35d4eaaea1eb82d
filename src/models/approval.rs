use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Stored approval status of a timesheet entry (`timesheets.approval_status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(ApprovalStatus::Pending),
            "Approved" => Some(ApprovalStatus::Approved),
            "Rejected" => Some(ApprovalStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// An admin's verdict on an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Decision {
    Approve,
    Reject,
}

/// Approval state of an entry.
///
/// `approved_by` only exists in the `Approved` variant, so a Pending or
/// Rejected entry can never carry a reviewer name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ApprovalState {
    #[default]
    Pending,
    Approved {
        by: String,
    },
    Rejected,
}

impl ApprovalState {
    pub fn status(&self) -> ApprovalStatus {
        match self {
            ApprovalState::Pending => ApprovalStatus::Pending,
            ApprovalState::Approved { .. } => ApprovalStatus::Approved,
            ApprovalState::Rejected => ApprovalStatus::Rejected,
        }
    }

    pub fn approved_by(&self) -> Option<&str> {
        match self {
            ApprovalState::Approved { by } => Some(by),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ApprovalState::Pending)
    }

    /// The one transition table of the approval lifecycle.
    ///
    /// Every state accepts both decisions; re-reviewing an Approved or
    /// Rejected entry overrides the previous verdict.
    pub fn transition(&self, decision: Decision, reviewer: &str) -> ApprovalState {
        match (self, decision) {
            (_, Decision::Approve) => ApprovalState::Approved {
                by: reviewer.to_string(),
            },
            (_, Decision::Reject) => ApprovalState::Rejected,
        }
    }

    /// Rebuild the state from the two stored columns.
    /// Returns `None` for an Approved row without a reviewer.
    pub fn from_columns(status: ApprovalStatus, approved_by: Option<String>) -> Option<Self> {
        match status {
            ApprovalStatus::Pending => Some(ApprovalState::Pending),
            ApprovalStatus::Approved => approved_by.map(|by| ApprovalState::Approved { by }),
            ApprovalStatus::Rejected => Some(ApprovalState::Rejected),
        }
    }
}
