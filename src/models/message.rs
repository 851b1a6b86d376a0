//! Project chat messages and reviews

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auth::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub project_id: u64,
    pub sender_id: u64,
    pub sender_role: Role,
    pub receiver_id: u64,
    pub receiver_role: Role,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub project_id: u64,
    pub receiver_id: u64,
    pub receiver_role: Role,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: u64,
    pub project_id: u64,
    pub freelancer_id: u64,
    pub client_id: u64,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Review of the other party on a completed project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub project_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freelancer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl NewReview {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    pub fn rating_in_range(&self) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating)
    }
}
