use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceRecommendation {
    pub service_id: String,
    pub service_name: String,
    pub reasoning: String,
}

/// What the wellness concierge says back to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<ServiceRecommendation>,
}

impl ChatReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            recommendation: None,
        }
    }

    pub fn recommending(recommendation: ServiceRecommendation) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: recommendation.reasoning.clone(),
            recommendation: Some(recommendation),
        }
    }
}

/// Form filled in after accepting a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecommendationBooking {
    pub service_id: String,
    pub name: String,
    #[serde(default = "one_guest")]
    pub guests: u32,
    pub duration: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

fn one_guest() -> u32 {
    1
}
