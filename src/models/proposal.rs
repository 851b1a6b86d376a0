//! Proposals submitted by freelancers

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    /// Any other value the server has stored; never sent
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalStatus::Pending => write!(f, "pending"),
            ProposalStatus::Accepted => write!(f, "accepted"),
            ProposalStatus::Rejected => write!(f, "rejected"),
            ProposalStatus::Completed => write!(f, "completed"),
            ProposalStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    pub project_id: u64,
    pub freelancer_id: u64,
    pub bid_amount: f64,
    pub estimated_days: u32,
    #[serde(default)]
    pub message: Option<String>,
    pub status: ProposalStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProposal {
    pub project_id: u64,
    pub bid_amount: f64,
    pub estimated_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a status change; clients accept or reject, admins may set any status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalStatusUpdate {
    pub status: ProposalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognised_status_decodes_as_unknown() {
        let json = r#"{"id": 1, "project_id": 2, "freelancer_id": 3, "bid_amount": 10.0,
            "estimated_days": 4, "status": "withdrawn", "created_at": "2025-01-10T08:00:00"}"#;
        let proposal: Proposal = serde_json::from_str(json).unwrap();
        assert_eq!(proposal.status, ProposalStatus::Unknown);
    }
}
