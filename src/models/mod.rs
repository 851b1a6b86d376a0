//! Typed records exchanged with the marketplace API

mod message;
mod profile;
mod project;
mod proposal;
mod recommendation;

pub use message::{Message, NewMessage, NewReview, Review};
pub use profile::{
    ClientProfile, ClientUpdate, FreelancerProfile, FreelancerUpdate, NewClient,
    NewFreelancer, Skill,
};
pub use project::{NewProject, Project, ProjectStatus, ProjectUpdate};
pub use proposal::{NewProposal, Proposal, ProposalStatus, ProposalStatusUpdate};
pub use recommendation::{Recommendation, RecommendationList};

use serde::{Deserialize, Serialize};

/// Body of responses that only confirm an action
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// `{ "message", "project" }` returned by project mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub project: Project,
}

/// `{ "message", "proposal" }` returned by proposal mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub proposal: Proposal,
}

/// `{ "message", "client" }` returned by client mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub client: ClientProfile,
}

/// `{ "message", "freelancer" }` returned by freelancer mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreelancerEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub freelancer: FreelancerProfile,
}

/// `{ "message", "message_data" }` returned when a chat message is sent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    pub message_data: Message,
}
