//! Account records: clients and freelancers

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// A normalized skill tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerProfile {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Free-text skills, kept by the server alongside `skill_set`
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub skill_set: Vec<Skill>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    pub created_at: NaiveDateTime,
}

impl FreelancerProfile {
    /// Skill names joined for display
    pub fn skill_names(&self) -> String {
        self.skill_set
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Registration payload for a client account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Registration payload for a freelancer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFreelancer {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Partial update of a client; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Partial update of a freelancer; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FreelancerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ClientUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company.is_none() && self.phone.is_none() && self.password.is_none()
    }
}

impl FreelancerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.skills.is_none()
            && self.portfolio_url.is_none()
            && self.phone.is_none()
            && self.password.is_none()
    }
}
