//! Role dashboards assembled from independently loaded sections
//!
//! Sections load concurrently and all settle before the dashboard is
//! returned. Each keeps its own outcome, so one failing section leaves its
//! siblings intact and can be retried alone.

use futures_util::future::join_all;
use serde::Serialize;
use std::fmt;

use crate::api::ApiClient;
use crate::auth::{Identity, Role};
use crate::error::{Error, Result};
use crate::models::{ClientProfile, FreelancerProfile, Project, Proposal};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Profile,
    Projects,
    Proposals,
    CompletedProjects,
    Clients,
    Freelancers,
}

impl SectionKind {
    /// Sections shown on a role's dashboard, in display order
    pub fn for_role(role: Role) -> &'static [SectionKind] {
        match role {
            Role::Client => &[SectionKind::Profile, SectionKind::Projects],
            Role::Freelancer => &[
                SectionKind::Profile,
                SectionKind::Projects,
                SectionKind::Proposals,
                SectionKind::CompletedProjects,
            ],
            Role::Admin => &[
                SectionKind::Clients,
                SectionKind::Freelancers,
                SectionKind::Projects,
                SectionKind::Proposals,
            ],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Profile => "Profile",
            SectionKind::Projects => "Projects",
            SectionKind::Proposals => "Proposals",
            SectionKind::CompletedProjects => "Completed projects",
            SectionKind::Clients => "Clients",
            SectionKind::Freelancers => "Freelancers",
        }
    }

    /// Generic notice used when the server gave no message
    pub fn failure_notice(&self) -> String {
        format!("Could not load {}.", self.title().to_lowercase())
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SectionData {
    ClientProfile(ClientProfile),
    FreelancerProfile(FreelancerProfile),
    Projects(Vec<Project>),
    Proposals(Vec<Proposal>),
    Clients(Vec<ClientProfile>),
    Freelancers(Vec<FreelancerProfile>),
}

#[derive(Debug)]
pub struct Section {
    pub kind: SectionKind,
    pub outcome: Result<SectionData>,
}

impl Section {
    /// Text to show in place of a failed section
    pub fn failure_message(&self) -> Option<String> {
        self.outcome
            .as_ref()
            .err()
            .map(|e| e.user_message(&self.kind.failure_notice()))
    }
}

#[derive(Debug)]
pub struct Dashboard {
    pub identity: Identity,
    pub sections: Vec<Section>,
}

impl Dashboard {
    /// True when any section was rejected with 401; the session is already cleared
    pub fn session_ended(&self) -> bool {
        self.sections
            .iter()
            .any(|s| matches!(&s.outcome, Err(e) if e.is_session_invalid()))
    }

    pub fn failed_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.outcome.is_err())
    }
}

/// Load every section of the signed-in user's dashboard
pub async fn load(client: &ApiClient) -> Result<Dashboard> {
    let identity = client.session().identity().await.ok_or(Error::NotSignedIn)?;
    let kinds = SectionKind::for_role(identity.role);
    Ok(load_sections(client, identity, kinds).await)
}

/// Load a chosen subset of sections, e.g. to retry the ones that failed
pub async fn load_sections(
    client: &ApiClient,
    identity: Identity,
    kinds: &[SectionKind],
) -> Dashboard {
    tracing::debug!(identity = %identity, sections = kinds.len(), "Loading dashboard");

    let sections = join_all(kinds.iter().map(|&kind| async move {
        let outcome = load_section(client, identity.role, kind).await;
        if let Err(e) = &outcome {
            tracing::warn!(section = %kind, "Section failed: {}", e);
        }
        Section { kind, outcome }
    }))
    .await;

    Dashboard { identity, sections }
}

/// Fetch the data behind one section for `role`
pub async fn load_section(client: &ApiClient, role: Role, kind: SectionKind) -> Result<SectionData> {
    match (role, kind) {
        (Role::Client, SectionKind::Profile) => {
            client.client_profile().await.map(SectionData::ClientProfile)
        }
        (Role::Freelancer, SectionKind::Profile) => {
            client.freelancer_me().await.map(SectionData::FreelancerProfile)
        }
        (Role::Admin, SectionKind::Projects) => {
            client.admin_projects().await.map(SectionData::Projects)
        }
        (_, SectionKind::Projects) => client.projects().await.map(SectionData::Projects),
        (Role::Freelancer, SectionKind::Proposals) => {
            client.my_proposals().await.map(SectionData::Proposals)
        }
        (Role::Admin, SectionKind::Proposals) => {
            client.admin_proposals().await.map(SectionData::Proposals)
        }
        (Role::Freelancer, SectionKind::CompletedProjects) => {
            client.completed_projects().await.map(SectionData::Projects)
        }
        (Role::Admin, SectionKind::Clients) => {
            client.admin_clients().await.map(SectionData::Clients)
        }
        (Role::Admin, SectionKind::Freelancers) => {
            client.admin_freelancers().await.map(SectionData::Freelancers)
        }
        (role, kind) => Err(Error::Other(format!(
            "The {} section is not available to {} accounts",
            kind.title().to_lowercase(),
            role
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_per_role() {
        assert_eq!(SectionKind::for_role(Role::Client).len(), 2);
        assert!(SectionKind::for_role(Role::Freelancer).contains(&SectionKind::CompletedProjects));
        assert!(!SectionKind::for_role(Role::Admin).contains(&SectionKind::Profile));
    }

    #[test]
    fn test_failure_message_falls_back_to_notice() {
        let section = Section {
            kind: SectionKind::Projects,
            outcome: Err(Error::Api {
                status: 500,
                message: None,
            }),
        };
        assert_eq!(section.failure_message().as_deref(), Some("Could not load projects."));
    }
}
