use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel student id stamped on requests created before the student filled
/// in a roll number. Shown to a student only when they explicitly ask for
/// unassigned requests; strict id matching is the default.
pub const UNASSIGNED_STUDENT_ID: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutpassRequest {
    pub id: String,
    pub student_name: String,
    pub student_id: String,
    pub kind: OutpassKind,
    pub reason: String,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub status: OutpassStatus,
    /// Stamped at creation, immutable thereafter.
    pub request_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutpassKind {
    Home,
    City,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutpassStatus {
    Pending,
    Approved,
    Rejected,
}

impl OutpassStatus {
    /// Approved and Rejected are terminal; only Pending requests move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OutpassStatus::Pending)
    }
}
