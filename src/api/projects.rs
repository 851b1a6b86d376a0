//! Projects and recommendations

use super::ApiClient;
use crate::error::Result;
use crate::models::{
    NewProject, Project, ProjectEnvelope, ProjectUpdate, RecommendationList, StatusMessage,
};

impl ApiClient {
    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        let envelope: ProjectEnvelope = self.post("/project/create", project).await?;
        Ok(envelope.project)
    }

    /// A client's own projects, or the open projects when signed in as a freelancer
    pub async fn projects(&self) -> Result<Vec<Project>> {
        self.get("/project/all").await
    }

    pub async fn project(&self, project_id: u64) -> Result<Project> {
        self.get(&format!("/project/{}", project_id)).await
    }

    pub async fn update_project(&self, project_id: u64, update: &ProjectUpdate) -> Result<Project> {
        let envelope: ProjectEnvelope = self
            .put(&format!("/project/{}", project_id), update)
            .await?;
        Ok(envelope.project)
    }

    pub async fn delete_project(&self, project_id: u64) -> Result<StatusMessage> {
        self.delete(&format!("/project/{}", project_id)).await
    }

    pub async fn complete_project(&self, project_id: u64) -> Result<Project> {
        let envelope: ProjectEnvelope = self
            .patch(&format!("/project/{}/complete", project_id))
            .await?;
        Ok(envelope.project)
    }

    /// Freelancers ranked for one of the signed-in client's projects
    pub async fn recommendations(&self, project_id: u64) -> Result<RecommendationList> {
        self.get(&format!("/recommendation/project/{}", project_id))
            .await
    }
}
