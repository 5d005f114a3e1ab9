const PROMPT_HEADER: &str = "You are a medical triage assistant. Based on these symptoms, recommend whether the person should go to the ER, Urgent Care, or can treat at home.";

const RESPONSE_FORMAT: &str = r#"Respond in this EXACT JSON format (no markdown, no backticks, just raw JSON):
{
  "recommendation": "ER" or "URGENT_CARE" or "HOME_CARE",
  "severity": "Critical" or "Moderate" or "Mild",
  "reasoning": "Brief explanation",
  "redFlags": ["list", "of", "warning", "signs"],
  "timeframe": "When to seek care",
  "estimatedCost": {
    "er": "$X,XXX-$X,XXX",
    "urgentCare": "$XXX-$XXX",
    "homeCare": "$XX-$XXX"
  },
  "whatToExpect": "What happens at recommended facility",
  "alternatives": "Other options to consider"
}

IMPORTANT: Output ONLY valid JSON, no other text."#;

/// Build the triage instruction for the given (possibly augmented) symptom text.
pub fn build_prompt(symptom_text: &str) -> String {
    format!("{PROMPT_HEADER}\n\nSymptoms: {symptom_text}\n\n{RESPONSE_FORMAT}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_symptoms() {
        let prompt = build_prompt("stomach pain\n\nOnset: Today");
        assert!(prompt.contains("Symptoms: stomach pain\n\nOnset: Today"));
    }

    #[test]
    fn prompt_requests_json_verdict() {
        let prompt = build_prompt("x");
        assert!(prompt.contains("\"recommendation\": \"ER\" or \"URGENT_CARE\" or \"HOME_CARE\""));
        assert!(prompt.ends_with("Output ONLY valid JSON, no other text."));
    }
}
