use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::ReasoningError;

/// Where the person should seek care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "URGENT_CARE")]
    UrgentCare,
    #[serde(rename = "HOME_CARE")]
    HomeCare,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimatedCost {
    pub er: String,
    pub urgent_care: String,
    pub home_care: String,
}

/// Care recommendation returned by the reasoning service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub recommendation: Recommendation,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<EstimatedCost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_to_expect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior turn of conversation forwarded with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Anything that can turn symptom text into a care verdict.
#[async_trait]
pub trait ReasoningClient: Send + Sync {
    async fn assess(
        &self,
        symptom_text: &str,
        history: &[ChatMessage],
    ) -> Result<Verdict, ReasoningError>;
}
