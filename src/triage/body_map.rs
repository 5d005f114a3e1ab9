//! Body-region picker output → symptom text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TriageError;
use crate::models::enums::SymptomToken;

/// One region selected on the body picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyRegion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// Canonical phrase fed to the classifier for each picker token.
pub fn phrase_for(token: SymptomToken) -> &'static str {
    match token {
        SymptomToken::Fatigue => "tired all the time",
        SymptomToken::Fever => "fever and chills",
        SymptomToken::Anxiety => "feeling anxious",
        SymptomToken::Sleep => "trouble sleeping",
        SymptomToken::Nausea => "nausea and vomiting",
        SymptomToken::Skin => "skin rash",
        SymptomToken::Headache => "headache",
        // tightness rather than pain: "chest pain" is an emergency phrase
        SymptomToken::Chest => "chest tightness",
        SymptomToken::Breathing => "shortness of breath",
        SymptomToken::Abdominal => "stomach pain",
        SymptomToken::Back => "back pain",
        SymptomToken::Joint => "joint pain",
        SymptomToken::Numbness => "numbness and tingling",
        SymptomToken::Urinary => "urinary problems",
        SymptomToken::Dizziness => "dizziness",
    }
}

/// Join the phrases of every distinct known token, in first-seen order.
pub fn text_from_regions(regions: &[BodyRegion]) -> Result<String, TriageError> {
    let mut tokens: Vec<SymptomToken> = Vec::new();

    for region in regions {
        for raw in &region.symptoms {
            match SymptomToken::from_str(raw) {
                Ok(token) if !tokens.contains(&token) => tokens.push(token),
                Ok(_) => {}
                Err(_) => {
                    tracing::debug!(
                        region = %region.id,
                        token = %raw,
                        "Ignoring unknown symptom token"
                    );
                }
            }
        }
    }

    if tokens.is_empty() {
        return Err(TriageError::NoRegionsSelected);
    }

    Ok(tokens
        .into_iter()
        .map(phrase_for)
        .collect::<Vec<_>>()
        .join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(id: &str, symptoms: &[&str]) -> BodyRegion {
        BodyRegion {
            id: id.into(),
            name: id.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn single_region_maps_to_phrase() {
        let text = text_from_regions(&[region("torso", &["chest"])]).unwrap();
        assert_eq!(text, "chest tightness");
    }

    #[test]
    fn tokens_are_deduplicated_in_first_seen_order() {
        let text = text_from_regions(&[
            region("head", &["headache", "dizziness"]),
            region("torso", &["abdominal", "headache"]),
        ])
        .unwrap();
        assert_eq!(text, "headache, dizziness, stomach pain");
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        let text = text_from_regions(&[region("arm", &["elbow", "joint"])]).unwrap();
        assert_eq!(text, "joint pain");
    }

    #[test]
    fn nothing_recognised_is_an_error() {
        assert_eq!(text_from_regions(&[]), Err(TriageError::NoRegionsSelected));
        assert_eq!(
            text_from_regions(&[region("arm", &["elbow"])]),
            Err(TriageError::NoRegionsSelected)
        );
    }

    #[test]
    fn deserializes_without_symptoms() {
        let region: BodyRegion = serde_json::from_str(r#"{"id":"head","name":"Head"}"#).unwrap();
        assert!(region.symptoms.is_empty());
    }
}
