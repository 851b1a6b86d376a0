//! Own-profile and freelancer lookups

use super::ApiClient;
use crate::error::Result;
use crate::models::{
    ClientEnvelope, ClientProfile, ClientUpdate, FreelancerEnvelope, FreelancerProfile,
    FreelancerUpdate, Project,
};

impl ApiClient {
    pub async fn client_profile(&self) -> Result<ClientProfile> {
        self.get("/client/profile").await
    }

    pub async fn update_client_profile(&self, update: &ClientUpdate) -> Result<ClientProfile> {
        let envelope: ClientEnvelope = self.put("/client/profile", update).await?;
        Ok(envelope.client)
    }

    /// Profile of the signed-in freelancer
    pub async fn freelancer_me(&self) -> Result<FreelancerProfile> {
        self.get("/freelancer/me").await
    }

    pub async fn freelancer(&self, freelancer_id: u64) -> Result<FreelancerProfile> {
        self.get(&format!("/freelancer/{}", freelancer_id)).await
    }

    pub async fn update_freelancer_profile(
        &self,
        update: &FreelancerUpdate,
    ) -> Result<FreelancerProfile> {
        let envelope: FreelancerEnvelope = self.put("/freelancer/profile", update).await?;
        Ok(envelope.freelancer)
    }

    /// Projects the signed-in freelancer has finished
    pub async fn completed_projects(&self) -> Result<Vec<Project>> {
        self.get("/freelancer/projects/completed").await
    }
}
