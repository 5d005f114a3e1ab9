use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::types::Verdict;
use super::ReasoningError;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\n?").expect("valid fence pattern"));

/// Message envelope: `{"content": [{"text": "..."}]}`
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

/// Pull the text of the first content block out of the service response body.
pub fn parse_envelope(body: &str) -> Result<String, ReasoningError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ReasoningError::Envelope(e.to_string()))?;

    envelope
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ReasoningError::EmptyResponse)
}

/// Remove markdown code fences and surrounding whitespace.
pub fn strip_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Parse verdict JSON, tolerating a fenced reply.
pub fn parse_verdict(text: &str) -> Result<Verdict, ReasoningError> {
    let cleaned = strip_fences(text);
    serde_json::from_str(&cleaned).map_err(|e| ReasoningError::Verdict(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::types::Recommendation;

    const VERDICT: &str = r#"{
        "recommendation": "URGENT_CARE",
        "severity": "Moderate",
        "reasoning": "Persistent pain should be examined.",
        "redFlags": ["fever above 103F"],
        "timeframe": "Within 24 hours",
        "estimatedCost": {"er": "$1,500-$3,000", "urgentCare": "$150-$300", "homeCare": "$10-$30"},
        "whatToExpect": "A physical exam.",
        "alternatives": "Telehealth visit"
    }"#;

    #[test]
    fn parses_plain_verdict() {
        let verdict = parse_verdict(VERDICT).unwrap();
        assert_eq!(verdict.recommendation, Recommendation::UrgentCare);
        assert_eq!(verdict.red_flags, vec!["fever above 103F"]);
        assert_eq!(verdict.estimated_cost.unwrap().urgent_care, "$150-$300");
    }

    #[test]
    fn parses_fenced_verdict() {
        let fenced = format!("```json\n{VERDICT}\n```");
        let verdict = parse_verdict(&fenced).unwrap();
        assert_eq!(verdict.severity, "Moderate");

        let bare_fence = format!("```\n{VERDICT}```  ");
        assert!(parse_verdict(&bare_fence).is_ok());
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let verdict = parse_verdict(r#"{"recommendation":"HOME_CARE"}"#).unwrap();
        assert_eq!(verdict.recommendation, Recommendation::HomeCare);
        assert!(verdict.red_flags.is_empty());
        assert!(verdict.estimated_cost.is_none());
    }

    #[test]
    fn garbage_is_a_verdict_error() {
        assert!(matches!(
            parse_verdict("I think you should rest."),
            Err(ReasoningError::Verdict(_))
        ));
        assert!(matches!(
            parse_verdict(r#"{"recommendation":"PHARMACY"}"#),
            Err(ReasoningError::Verdict(_))
        ));
    }

    #[test]
    fn envelope_yields_first_text_block() {
        let body = r#"{"id":"msg_1","content":[{"type":"text","text":"hello"}]}"#;
        assert_eq!(parse_envelope(body).unwrap(), "hello");
    }

    #[test]
    fn empty_envelope_is_an_error() {
        assert_eq!(
            parse_envelope(r#"{"content":[]}"#),
            Err(ReasoningError::EmptyResponse)
        );
        assert_eq!(
            parse_envelope(r#"{"content":[{"type":"text","text":"  "}]}"#),
            Err(ReasoningError::EmptyResponse)
        );
        assert!(matches!(
            parse_envelope("<html>"),
            Err(ReasoningError::Envelope(_))
        ));
    }
}
