//! Classification orchestrator.
//!
//! First pass (raw text): validate → emergency → vague → defer.
//! Second pass (after follow-up): emergency on the augmented text → defer.
//! The reasoning service is never called from here.

use super::emergency::{detect_emergency, hotlines_for, response_for};
use super::followup::FollowUpAnswers;
use super::types::ClassificationOutcome;
use super::vague::detect_vague;
use super::validator::{check, guidance_message};
use crate::models::enums::Language;

/// Classify with English guidance text.
pub fn classify(raw_text: &str, prior: Option<&FollowUpAnswers>) -> ClassificationOutcome {
    classify_localized(raw_text, prior, Language::En)
}

pub fn classify_localized(
    raw_text: &str,
    prior: Option<&FollowUpAnswers>,
    lang: Language,
) -> ClassificationOutcome {
    let outcome = run(raw_text, prior, lang);
    log_outcome(&outcome, prior.is_some());
    outcome
}

fn run(raw_text: &str, prior: Option<&FollowUpAnswers>, lang: Language) -> ClassificationOutcome {
    if prior.is_none() {
        if let Err(reason) = check(raw_text) {
            return ClassificationOutcome::InvalidInput {
                reason,
                message: guidance_message(lang),
            };
        }
    }

    let text = match prior {
        Some(answers) => answers.augment(raw_text),
        None => raw_text.to_string(),
    };

    if let Some(hit) = detect_emergency(&text) {
        return ClassificationOutcome::Emergency {
            category: hit.category,
            matched_pattern: hit.matched_pattern,
            response: response_for(hit.category),
            hotlines: hotlines_for(hit.category),
        };
    }

    if prior.is_none() {
        if let Some(hit) = detect_vague(&text) {
            return ClassificationOutcome::NeedsFollowUp {
                category: hit.category,
                matched_pattern: hit.matched_pattern,
                question_set: hit.question_set,
            };
        }
    }

    ClassificationOutcome::DeferToReasoningService {
        augmented_text: text,
    }
}

/// Log the decision WITHOUT the symptom text.
fn log_outcome(outcome: &ClassificationOutcome, second_pass: bool) {
    match outcome {
        ClassificationOutcome::Emergency {
            category,
            matched_pattern,
            ..
        } => {
            tracing::warn!(
                outcome = "emergency",
                category = %category,
                pattern = %matched_pattern,
                second_pass,
                "Classification: emergency"
            );
        }
        ClassificationOutcome::InvalidInput { reason, .. } => {
            tracing::info!(
                outcome = "invalid_input",
                rule = reason.as_str(),
                "Classification: input rejected"
            );
        }
        ClassificationOutcome::NeedsFollowUp {
            category,
            matched_pattern,
            ..
        } => {
            tracing::info!(
                outcome = "needs_follow_up",
                category = %category,
                pattern = %matched_pattern,
                "Classification: follow-up required"
            );
        }
        ClassificationOutcome::DeferToReasoningService { .. } => {
            tracing::info!(
                outcome = "defer",
                second_pass,
                "Classification: deferring to reasoning service"
            );
        }
    }
}
