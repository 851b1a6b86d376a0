//! Proposals

use super::ApiClient;
use crate::error::Result;
use crate::models::{
    NewProposal, Proposal, ProposalEnvelope, ProposalStatus, ProposalStatusUpdate, StatusMessage,
};

impl ApiClient {
    pub async fn create_proposal(&self, proposal: &NewProposal) -> Result<Proposal> {
        let envelope: ProposalEnvelope = self.post("/proposal/create", proposal).await?;
        Ok(envelope.proposal)
    }

    /// Proposals received for one of the signed-in client's projects
    pub async fn project_proposals(&self, project_id: u64) -> Result<Vec<Proposal>> {
        self.get(&format!("/proposal/all/{}", project_id)).await
    }

    pub async fn proposal(&self, proposal_id: u64) -> Result<Proposal> {
        self.get(&format!("/proposal/{}", proposal_id)).await
    }

    /// Accept or reject a proposal
    pub async fn update_proposal_status(
        &self,
        proposal_id: u64,
        status: ProposalStatus,
    ) -> Result<Proposal> {
        let envelope: ProposalEnvelope = self
            .put(
                &format!("/proposal/{}", proposal_id),
                &ProposalStatusUpdate { status },
            )
            .await?;
        Ok(envelope.proposal)
    }

    pub async fn delete_proposal(&self, proposal_id: u64) -> Result<StatusMessage> {
        self.delete(&format!("/proposal/{}", proposal_id)).await
    }

    /// Proposals the signed-in freelancer has submitted
    pub async fn my_proposals(&self) -> Result<Vec<Proposal>> {
        self.get("/proposal/freelancer/proposals").await
    }

    pub async fn complete_proposal(&self, proposal_id: u64) -> Result<Proposal> {
        let envelope: ProposalEnvelope = self
            .patch(&format!("/proposal/{}/complete", proposal_id))
            .await?;
        Ok(envelope.proposal)
    }
}
