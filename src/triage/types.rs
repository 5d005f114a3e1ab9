use serde::Serialize;

use super::fuzzy::normalize;
use super::questions::QuestionSet;
use super::validator::InvalidReason;
use crate::models::enums::{EmergencyCategory, VagueCategory};

/// Raw phrase lists for one category, one list per supported language.
pub(crate) struct PhraseList<C: 'static> {
    pub category: C,
    pub en: &'static [&'static str],
    pub es: &'static [&'static str],
}

/// One category of a compiled pattern catalogue. Patterns are normalized
/// once at load, English before Spanish, in declaration order.
#[derive(Debug)]
pub(crate) struct CatalogueEntry<C> {
    pub category: C,
    pub patterns: Vec<String>,
}

pub(crate) fn compile<C: Copy>(lists: &[PhraseList<C>]) -> Vec<CatalogueEntry<C>> {
    lists
        .iter()
        .map(|list| CatalogueEntry {
            category: list.category,
            patterns: list.en.iter().chain(list.es).map(|p| normalize(p)).collect(),
        })
        .collect()
}

/// First emergency pattern found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyDetection {
    pub category: EmergencyCategory,
    pub matched_pattern: &'static str,
}

/// Winning vague-symptom match and the questions that go with it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VagueDetection {
    pub category: VagueCategory,
    pub matched_pattern: &'static str,
    pub score: u32,
    pub exact: bool,
    pub question_set: &'static QuestionSet,
}

/// Static guidance shown for an emergency category.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EmergencyResponse {
    pub title: &'static str,
    pub action: &'static str,
    pub instructions: &'static [&'static str],
    pub warning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotline {
    pub name: &'static str,
    pub number: &'static str,
}

pub const EMERGENCY_SERVICES: Hotline = Hotline {
    name: "Emergency Services",
    number: "911",
};

pub const POISON_CONTROL: Hotline = Hotline {
    name: "Poison Control",
    number: "1-800-222-1222",
};

pub const CRISIS_LIFELINE: Hotline = Hotline {
    name: "Suicide & Crisis Lifeline",
    number: "988",
};

/// Result of one classification step. Exactly one variant per call.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClassificationOutcome {
    Emergency {
        category: EmergencyCategory,
        matched_pattern: &'static str,
        response: &'static EmergencyResponse,
        hotlines: Vec<Hotline>,
    },
    InvalidInput {
        reason: InvalidReason,
        message: &'static str,
    },
    NeedsFollowUp {
        category: VagueCategory,
        matched_pattern: &'static str,
        question_set: &'static QuestionSet,
    },
    DeferToReasoningService {
        augmented_text: String,
    },
}

impl ClassificationOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Emergency { .. } => "emergency",
            Self::InvalidInput { .. } => "invalid_input",
            Self::NeedsFollowUp { .. } => "needs_follow_up",
            Self::DeferToReasoningService { .. } => "defer_to_reasoning_service",
        }
    }
}
