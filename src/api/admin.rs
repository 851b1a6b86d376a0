//! Administrator record management

use super::ApiClient;
use crate::error::Result;
use crate::models::{
    ClientEnvelope, ClientProfile, ClientUpdate, FreelancerEnvelope, FreelancerProfile,
    FreelancerUpdate, NewClient, NewFreelancer, Project, ProjectEnvelope, ProjectUpdate, Proposal,
    ProposalEnvelope, ProposalStatus, ProposalStatusUpdate, StatusMessage,
};

/// Record kinds an administrator can delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRecord {
    Client,
    Freelancer,
    Project,
    Proposal,
}

impl AdminRecord {
    fn path(&self, id: u64) -> String {
        let kind = match self {
            AdminRecord::Client => "client",
            AdminRecord::Freelancer => "freelancer",
            AdminRecord::Project => "project",
            AdminRecord::Proposal => "proposal",
        };
        format!("/admin/{}/{}", kind, id)
    }
}

impl ApiClient {
    pub async fn admin_clients(&self) -> Result<Vec<ClientProfile>> {
        self.get("/admin/clients").await
    }

    pub async fn admin_freelancers(&self) -> Result<Vec<FreelancerProfile>> {
        self.get("/admin/freelancers").await
    }

    pub async fn admin_projects(&self) -> Result<Vec<Project>> {
        self.get("/admin/projects").await
    }

    pub async fn admin_proposals(&self) -> Result<Vec<Proposal>> {
        self.get("/admin/proposals").await
    }

    pub async fn admin_create_client(&self, client: &NewClient) -> Result<ClientProfile> {
        let envelope: ClientEnvelope = self.post("/admin/client", client).await?;
        Ok(envelope.client)
    }

    pub async fn admin_create_freelancer(
        &self,
        freelancer: &NewFreelancer,
    ) -> Result<FreelancerProfile> {
        let envelope: FreelancerEnvelope = self.post("/admin/freelancer", freelancer).await?;
        Ok(envelope.freelancer)
    }

    pub async fn admin_update_client(
        &self,
        client_id: u64,
        update: &ClientUpdate,
    ) -> Result<ClientProfile> {
        let envelope: ClientEnvelope = self
            .put(&AdminRecord::Client.path(client_id), update)
            .await?;
        Ok(envelope.client)
    }

    pub async fn admin_update_freelancer(
        &self,
        freelancer_id: u64,
        update: &FreelancerUpdate,
    ) -> Result<FreelancerProfile> {
        let envelope: FreelancerEnvelope = self
            .put(&AdminRecord::Freelancer.path(freelancer_id), update)
            .await?;
        Ok(envelope.freelancer)
    }

    pub async fn admin_update_project(
        &self,
        project_id: u64,
        update: &ProjectUpdate,
    ) -> Result<Project> {
        let envelope: ProjectEnvelope = self
            .put(&AdminRecord::Project.path(project_id), update)
            .await?;
        Ok(envelope.project)
    }

    pub async fn admin_update_proposal(
        &self,
        proposal_id: u64,
        status: ProposalStatus,
    ) -> Result<Proposal> {
        let envelope: ProposalEnvelope = self
            .put(
                &AdminRecord::Proposal.path(proposal_id),
                &ProposalStatusUpdate { status },
            )
            .await?;
        Ok(envelope.proposal)
    }

    pub async fn admin_delete(&self, record: AdminRecord, id: u64) -> Result<StatusMessage> {
        self.delete(&record.path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_paths() {
        assert_eq!(AdminRecord::Client.path(3), "/admin/client/3");
        assert_eq!(AdminRecord::Freelancer.path(4), "/admin/freelancer/4");
        assert_eq!(AdminRecord::Project.path(5), "/admin/project/5");
        assert_eq!(AdminRecord::Proposal.path(6), "/admin/proposal/6");
    }
}
