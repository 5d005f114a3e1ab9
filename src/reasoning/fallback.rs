use std::time::Duration;

use super::types::{ChatMessage, ReasoningClient, Recommendation, Verdict};
use super::ReasoningError;

const FALLBACK_REASONING: &str = "Unable to analyze symptoms. \
    When in doubt, please call 911 or visit the nearest Emergency Room.";

/// Verdict used whenever the reasoning service cannot produce one.
pub fn conservative_fallback() -> Verdict {
    Verdict {
        recommendation: Recommendation::Er,
        severity: "Unknown".into(),
        reasoning: FALLBACK_REASONING.into(),
        red_flags: vec!["Unable to complete analysis".into()],
        timeframe: "Immediately if symptoms are severe".into(),
        estimated_cost: None,
        what_to_expect: None,
        alternatives: None,
    }
}

/// Ask the reasoning service for a verdict, bounded by `timeout`.
///
/// Never fails: any error or timeout is logged and replaced by
/// [`conservative_fallback`].
pub async fn assess_with_fallback(
    client: &dyn ReasoningClient,
    symptom_text: &str,
    history: &[ChatMessage],
    timeout: Duration,
) -> Verdict {
    let result = match tokio::time::timeout(timeout, client.assess(symptom_text, history)).await {
        Ok(result) => result,
        Err(_) => Err(ReasoningError::Timeout(timeout)),
    };

    match result {
        Ok(verdict) => {
            tracing::info!(
                recommendation = ?verdict.recommendation,
                red_flags = verdict.red_flags.len(),
                "Reasoning service verdict received"
            );
            verdict
        }
        Err(e) => {
            tracing::warn!(error = %e, "Reasoning service failed, using conservative fallback");
            conservative_fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::client::MockReasoningClient;

    #[tokio::test]
    async fn fenced_reply_is_used() {
        let client = MockReasoningClient::new(
            "```json\n{\"recommendation\":\"URGENT_CARE\",\"severity\":\"Moderate\"}\n```",
        );
        let verdict = assess_with_fallback(&client, "back pain", &[], Duration::from_secs(1)).await;
        assert_eq!(verdict.recommendation, Recommendation::UrgentCare);
        assert_eq!(verdict.severity, "Moderate");
    }

    #[tokio::test]
    async fn garbage_reply_falls_back_to_er() {
        let client = MockReasoningClient::new("Sorry, I can't help with that.");
        let verdict = assess_with_fallback(&client, "back pain", &[], Duration::from_secs(1)).await;
        assert_eq!(verdict, conservative_fallback());
        assert_eq!(verdict.recommendation, Recommendation::Er);
        assert_eq!(verdict.severity, "Unknown");
    }

    #[tokio::test]
    async fn service_error_falls_back() {
        let client = MockReasoningClient::failing(ReasoningError::Status {
            status: 529,
            body: "overloaded".into(),
        });
        let verdict = assess_with_fallback(&client, "back pain", &[], Duration::from_secs(1)).await;
        assert_eq!(verdict.recommendation, Recommendation::Er);
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let client = MockReasoningClient::new(r#"{"recommendation":"HOME_CARE"}"#)
            .with_delay(Duration::from_secs(5));
        let verdict =
            assess_with_fallback(&client, "back pain", &[], Duration::from_millis(50)).await;
        assert_eq!(verdict, conservative_fallback());
    }

    #[test]
    fn fallback_serializes_in_camel_case() {
        let json = serde_json::to_value(conservative_fallback()).unwrap();
        assert_eq!(json["recommendation"], "ER");
        assert_eq!(json["redFlags"][0], "Unable to complete analysis");
        assert!(json.get("estimatedCost").is_none());
    }
}
