//! Project chat and reviews

use serde::Deserialize;

use super::ApiClient;
use crate::error::Result;
use crate::models::{Message, MessageEnvelope, NewMessage, NewReview, Review};

/// Review submission response; older servers answer with only a message
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewReceipt {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub review: Option<Review>,
}

impl ApiClient {
    pub async fn send_message(&self, message: &NewMessage) -> Result<Message> {
        let envelope: MessageEnvelope = self.post("/message/", message).await?;
        Ok(envelope.message_data)
    }

    pub async fn project_messages(&self, project_id: u64) -> Result<Vec<Message>> {
        self.get(&format!("/message/project/{}", project_id)).await
    }

    /// Client reviews the freelancer who completed a project
    pub async fn review_freelancer(&self, review: &NewReview) -> Result<ReviewReceipt> {
        self.post("/client/review", review).await
    }

    /// Freelancer reviews the client of a completed project
    pub async fn review_client(&self, review: &NewReview) -> Result<ReviewReceipt> {
        self.post("/freelancer/review", review).await
    }
}
