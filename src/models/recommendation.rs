//! Freelancer recommendations for a project

use serde::{Deserialize, Serialize};

use super::FreelancerProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub freelancer: FreelancerProfile,
    /// Combined skill/rating score in 0.0..=1.0
    pub score: f64,
    pub matching_skills: u32,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub review_count: u32,
}

/// The one response shape of the recommendations endpoint.
///
/// A project with no skills yields only `message`; that is an empty result,
/// not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationList {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationList {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_response_is_empty_list() {
        let json = r#"{"message": "Nenhuma habilidade associada ao projeto."}"#;
        let list: RecommendationList = serde_json::from_str(json).unwrap();
        assert!(list.is_empty());
        assert!(list.message.is_some());
    }

    #[test]
    fn test_full_response() {
        let json = r#"{
            "message": "Recomendações geradas com sucesso.",
            "recommendations": [{
                "freelancer": {"id": 1, "name": "Bia", "email": "b@x.io", "skill_set": [],
                               "role": "freelancer", "created_at": "2025-01-01T00:00:00"},
                "score": 0.75,
                "matching_skills": 2,
                "average_rating": null,
                "review_count": 0
            }]
        }"#;
        let list: RecommendationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.recommendations.len(), 1);
        assert_eq!(list.recommendations[0].matching_skills, 2);
        assert!(list.recommendations[0].average_rating.is_none());
    }

    #[test]
    fn test_bare_array_is_rejected() {
        let json = r#"[{"freelancer": {}, "score": 1.0, "matching_skills": 1}]"#;
        let result: Result<RecommendationList, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
